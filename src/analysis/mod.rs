//! Cross-resolution analysis: the responsive heuristics, the automation
//! filter, and the summary scorer.

mod filter;
mod responsive;
mod summary;

pub use filter::{filter_for_automation, MAX_FILTERED_ISSUES};
pub use responsive::{analyze_responsive, AREA_RATIO_LIMIT};
pub use summary::build_summary;
