//! Core data types carried through the pipeline.
//!
//! - `issue` - Findings, codes, and component geometry
//! - `grouped` - Enriched bundles consumed from the grouping engine
//! - `report` - Per-resolution and aggregate report shapes

mod grouped;
mod issue;
mod report;

pub use grouped::{AlternativeFix, FixImplementation, GroupedIssue, GroupedSeverity, SuggestedFix};
pub use issue::{ComponentMeasurement, Issue, IssueCode, IssueType};
pub use report::{
    MultiResolutionReport, ResolutionReport, ResponsiveIssue, ResponsiveIssueKind,
    ResponsiveSeverity, Summary,
};
