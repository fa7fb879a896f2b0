//! Report types assembled by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::resolution::Resolution;

use super::grouped::GroupedIssue;
use super::issue::{ComponentMeasurement, Issue};

/// One resolution's measured components and findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub resolution: Resolution,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentMeasurement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

/// A defect only observable by comparing resolutions against each other.
///
/// References resolution names, never raw measurements, so it composes
/// across renderer implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveIssue {
    #[serde(rename = "type")]
    pub kind: ResponsiveIssueKind,
    pub message: String,
    pub affected_resolutions: Vec<String>,
    pub component: String,
    pub severity: ResponsiveSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponsiveIssueKind {
    LayoutBreak,
    Overflow,
    SpacingInconsistency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveSeverity {
    High,
    Medium,
    Low,
}

/// Aggregate counts and the 0-100 quality score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_issues: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsive_issues: Vec<ResponsiveIssue>,
    pub overall_score: u8,
    pub critical_issues: usize,
    pub major_issues: usize,
    pub minor_issues: usize,
}

/// The final artifact returned to the caller. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiResolutionReport {
    pub reports: Vec<ResolutionReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grouped_issues: Vec<GroupedIssue>,
    pub summary: Summary,
    /// Unix epoch milliseconds at assembly time.
    pub timestamp: u64,
    pub total_render_time_ms: u64,
}
