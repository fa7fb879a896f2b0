//! Issue types produced by the renderer and carried through the pipeline.
//!
//! An issue is a finding, never a thrown error. Codes index into the
//! [`crate::catalog::IssueCatalog`]; the known code families are closed
//! variants so dedup keys and severity mapping are checked exhaustively,
//! with `Custom` as the escape hatch for catalog extensions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Classification of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Error,
    Warning,
    Info,
}

/// Catalog code of a finding.
///
/// Serialized as the code string ("E101", "W201", ...). Unknown codes
/// round-trip through `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueCode {
    /// E101: two components overlap.
    Overlap,
    /// E201: content extends beyond its parent container.
    ContainerOverflow,
    /// E301: component extends beyond the viewport.
    ViewportOverflow,
    /// W201: components are spaced closer than the minimum gap.
    SpacingTight,
    /// W202: sibling spacing is uneven.
    SpacingUneven,
    /// I401: components share an alignment edge.
    AlignmentConfirmed,
    /// Any code supplied via catalog extension.
    Custom(String),
}

impl IssueCode {
    pub fn as_str(&self) -> &str {
        match self {
            IssueCode::Overlap => "E101",
            IssueCode::ContainerOverflow => "E201",
            IssueCode::ViewportOverflow => "E301",
            IssueCode::SpacingTight => "W201",
            IssueCode::SpacingUneven => "W202",
            IssueCode::AlignmentConfirmed => "I401",
            IssueCode::Custom(code) => code.as_str(),
        }
    }
}

impl From<String> for IssueCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "E101" => IssueCode::Overlap,
            "E201" => IssueCode::ContainerOverflow,
            "E301" => IssueCode::ViewportOverflow,
            "W201" => IssueCode::SpacingTight,
            "W202" => IssueCode::SpacingUneven,
            "I401" => IssueCode::AlignmentConfirmed,
            _ => IssueCode::Custom(code),
        }
    }
}

impl From<&str> for IssueCode {
    fn from(code: &str) -> Self {
        IssueCode::from(code.to_string())
    }
}

impl From<IssueCode> for String {
    fn from(code: IssueCode) -> Self {
        code.as_str().to_string()
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single structural layout finding within one resolution's report.
///
/// `details` is a sorted map so serialization and plain-text rendering are
/// byte-stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub code: IssueCode,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub component_a: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_b: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, Value>,
}

impl Issue {
    /// A finding about a single component.
    pub fn single(
        code: IssueCode,
        issue_type: IssueType,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            issue_type,
            component_a: component.into(),
            component_b: None,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// A finding about a pair of components.
    pub fn pair(
        code: IssueCode,
        issue_type: IssueType,
        component_a: impl Into<String>,
        component_b: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            issue_type,
            component_a: component_a.into(),
            component_b: Some(component_b.into()),
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// One rendered UI element's identity and geometry within a resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeasurement {
    pub component: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ComponentMeasurement {
    pub fn new(component: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            component: component.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
