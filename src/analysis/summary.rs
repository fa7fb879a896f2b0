//! Aggregates counts across resolutions and computes the 0-100 score.

use crate::types::{
    GroupedIssue, GroupedSeverity, IssueType, ResolutionReport, ResponsiveIssue,
    ResponsiveSeverity, Summary,
};

const ERROR_PENALTY: i64 = 10;
const WARNING_PENALTY: i64 = 5;
const INFO_PENALTY: i64 = 1;

/// Build the run summary from the filtered per-resolution reports, the
/// derived responsive issues, and the grouped issues.
///
/// Responsive issues fold into the same three buckets as raw issues
/// (high maps to error, medium to warning, low to info) and count toward
/// the total. Grouped issues are tallied separately by severity; the
/// cosmetic bucket is intentionally left out of the tallies.
pub fn build_summary(
    reports: &[ResolutionReport],
    responsive_issues: Vec<ResponsiveIssue>,
    grouped_issues: &[GroupedIssue],
) -> Summary {
    let mut total_issues = 0usize;
    let mut error_count = 0usize;
    let mut warning_count = 0usize;
    let mut info_count = 0usize;

    for report in reports {
        total_issues += report.issues.len();
        for issue in &report.issues {
            match issue.issue_type {
                IssueType::Error => error_count += 1,
                IssueType::Warning => warning_count += 1,
                IssueType::Info => info_count += 1,
            }
        }
    }

    for issue in &responsive_issues {
        total_issues += 1;
        match issue.severity {
            ResponsiveSeverity::High => error_count += 1,
            ResponsiveSeverity::Medium => warning_count += 1,
            ResponsiveSeverity::Low => info_count += 1,
        }
    }

    let penalty = ERROR_PENALTY * error_count as i64
        + WARNING_PENALTY * warning_count as i64
        + INFO_PENALTY * info_count as i64;
    let overall_score = (100 - penalty).clamp(0, 100) as u8;

    let critical_issues = grouped_issues
        .iter()
        .filter(|g| g.severity == GroupedSeverity::Critical)
        .count();
    let major_issues = grouped_issues
        .iter()
        .filter(|g| g.severity == GroupedSeverity::Major)
        .count();
    let minor_issues = grouped_issues
        .iter()
        .filter(|g| g.severity == GroupedSeverity::Minor)
        .count();

    Summary {
        total_issues,
        error_count,
        warning_count,
        info_count,
        responsive_issues,
        overall_score,
        critical_issues,
        major_issues,
        minor_issues,
    }
}
