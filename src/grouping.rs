//! Contract for the external grouping/prioritization engine.

use crate::error::Result;
use crate::resolution::Resolution;
use crate::types::{GroupedIssue, Issue};

/// Converts one resolution's filtered raw issues into enriched, prioritized
/// bundles with suggested fixes. Supplied by the integrator; this core only
/// consumes the output.
pub trait IssueGrouper {
    fn group_issues(&self, issues: &[Issue], resolution: &Resolution) -> Result<Vec<GroupedIssue>>;
}
