//! Enriched issue bundles consumed from the external grouping engine.
//!
//! This core never constructs these itself; it concatenates what the
//! grouping engine returns, tallies severities into the summary, and
//! renders them in the plain-text report.

use serde::{Deserialize, Serialize};

use super::issue::Issue;

/// Severity assigned by the grouping engine.
///
/// `Cosmetic` exists in the data model but is not tallied into the summary
/// counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupedSeverity {
    Critical,
    Major,
    Minor,
    Cosmetic,
}

/// A deduplicated, prioritized issue bundle with an optional suggested fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedIssue {
    pub severity: GroupedSeverity,
    pub priority: u32,
    /// Confidence in the grouping, 0.0 to 1.0.
    pub confidence: f32,
    pub title: String,
    pub impact: String,
    pub users_affected: String,
    pub fix_effort: String,
    pub root_cause: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_components: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<SuggestedFix>,
    /// Raw issues folded into this group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFix {
    pub description: String,
    pub implementation: FixImplementation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_fixes: Vec<AlternativeFix>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixImplementation {
    pub selector: String,
    pub suggested_css: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeFix {
    pub description: String,
    pub css: String,
}
