//! Responsive Layout Analyzer (RLA) Library
//!
//! A library for testing rendered markup documents across standard viewport
//! resolutions. It drives an external renderer once per resolution, derives
//! responsive defects that only exist when comparing resolutions against
//! each other, filters the raw findings for automated consumers, and
//! assembles a single prioritized report with a 0-100 quality score.
//!
//! # Module Overview
//!
//! - [`tester`] - The `MultiResolutionTester` orchestrator
//! - [`analysis`] - Responsive heuristics, automation filter, summary scorer
//! - [`renderer`] - Contract for the external headless rendering engine
//! - [`grouping`] - Contract for the external grouping/prioritization engine
//! - [`report_gen`] - Contract for the optional report file generator
//! - [`catalog`] - Issue code catalog (classification and documentation)
//! - [`config`] - Tester options and TOML config file support
//! - [`types`] - Core data types and report structures
//! - [`format`] - Deterministic plain-text report rendering
//!
//! # Example
//!
//! ```no_run
//! use rla::{IssueGrouper, MultiResolutionTester, Renderer};
//!
//! # async fn example<R: Renderer, G: IssueGrouper>(renderer: R, grouper: G) -> rla::Result<()> {
//! let mut tester = MultiResolutionTester::new(renderer, grouper);
//! let report = tester.test_all_resolutions("<html>...</html>").await?;
//! println!("{}", MultiResolutionTester::<R, G>::format_report(&report));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod grouping;
pub mod renderer;
pub mod report_gen;
pub mod resolution;
pub mod tester;
pub mod types;

pub use analysis::{analyze_responsive, build_summary, filter_for_automation, AREA_RATIO_LIMIT, MAX_FILTERED_ISSUES};
pub use catalog::{CatalogEntry, IssueCatalog};
pub use config::{TesterOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_RENDER_TIMEOUT};
pub use error::{ErrorCategory, ErrorPayload, Result, RlaError};
pub use format::format_report;
pub use grouping::IssueGrouper;
pub use renderer::Renderer;
pub use report_gen::{ReportGenerator, ReportOptions};
pub use resolution::{default_resolutions, Resolution, ResolutionParseError};
pub use tester::{MultiResolutionTester, ProgressCallback};
pub use types::{
    AlternativeFix, ComponentMeasurement, FixImplementation, GroupedIssue, GroupedSeverity, Issue,
    IssueCode, IssueType, MultiResolutionReport, ResolutionReport, ResponsiveIssue,
    ResponsiveIssueKind, ResponsiveSeverity, SuggestedFix, Summary,
};
