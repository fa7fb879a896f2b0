//! Contract for the optional external report file generator.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::Result;
use crate::types::MultiResolutionReport;

/// Inputs handed to the generator alongside the assembled report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Directory the generated file should land in.
    pub output_path: PathBuf,
    pub project_name: Option<String>,
    pub include_screenshots: bool,
    /// Screenshot file per resolution name, when capture was enabled.
    pub screenshot_paths: BTreeMap<String, PathBuf>,
}

/// Renders the aggregate report as a file (e.g. HTML) for human review.
/// The returned path is logged by the orchestrator, not returned to its
/// caller.
pub trait ReportGenerator {
    fn generate_report(
        &self,
        report: &MultiResolutionReport,
        options: &ReportOptions,
    ) -> Result<PathBuf>;
}
