//! Deterministic plain-text rendering of a [`MultiResolutionReport`].

use std::fmt::Write as FmtWrite;

use crate::types::{
    GroupedSeverity, IssueType, MultiResolutionReport, ResponsiveSeverity,
};

fn type_icon(issue_type: IssueType) -> &'static str {
    match issue_type {
        IssueType::Error => "\u{2716}",   // ✖
        IssueType::Warning => "\u{26a0}", // ⚠
        IssueType::Info => "\u{2139}",    // ℹ
    }
}

fn grouped_icon(severity: GroupedSeverity) -> &'static str {
    match severity {
        GroupedSeverity::Critical => "\u{1f534}", // 🔴
        GroupedSeverity::Major => "\u{1f7e0}",    // 🟠
        GroupedSeverity::Minor => "\u{1f7e1}",    // 🟡
        GroupedSeverity::Cosmetic => "\u{26aa}",  // ⚪
    }
}

fn responsive_icon(severity: ResponsiveSeverity) -> &'static str {
    match severity {
        ResponsiveSeverity::High => "\u{1f534}",
        ResponsiveSeverity::Medium => "\u{1f7e0}",
        ResponsiveSeverity::Low => "\u{1f7e1}",
    }
}

/// Render the report as plain text in a fixed order: header, grouped
/// issues, per-resolution sections, responsive issues. Pure; identical
/// reports produce identical strings.
pub fn format_report(report: &MultiResolutionReport) -> String {
    let mut buf = String::new();
    let summary = &report.summary;

    writeln!(
        buf,
        "Layout report - score {}/100",
        summary.overall_score
    )
    .ok();
    writeln!(buf, "Total render time: {} ms", report.total_render_time_ms).ok();
    writeln!(
        buf,
        "Issues: {} total ({} errors, {} warnings, {} info)",
        summary.total_issues, summary.error_count, summary.warning_count, summary.info_count
    )
    .ok();
    if !report.grouped_issues.is_empty() {
        writeln!(
            buf,
            "Grouped: {} critical, {} major, {} minor",
            summary.critical_issues, summary.major_issues, summary.minor_issues
        )
        .ok();
    }

    if !report.grouped_issues.is_empty() {
        writeln!(buf).ok();
        writeln!(buf, "Grouped issues:").ok();
        for group in &report.grouped_issues {
            writeln!(
                buf,
                "{} [P{}] [{:.0}%] {}",
                grouped_icon(group.severity),
                group.priority,
                group.confidence * 100.0,
                group.title
            )
            .ok();
            writeln!(
                buf,
                "   Impact: {} | Users affected: {} | Fix effort: {}",
                group.impact, group.users_affected, group.fix_effort
            )
            .ok();
            writeln!(buf, "   Root cause: {}", group.root_cause).ok();
            if !group.affected_components.is_empty() {
                writeln!(buf, "   Components: {}", group.affected_components.join(", ")).ok();
            }
            if let Some(fix) = &group.suggested_fix {
                writeln!(buf, "   Suggested fix: {}", fix.description).ok();
                writeln!(buf, "     Selector: {}", fix.implementation.selector).ok();
                writeln!(buf, "     CSS: {}", fix.implementation.suggested_css).ok();
                writeln!(buf, "     Why: {}", fix.implementation.explanation).ok();
                for alternative in &fix.alternative_fixes {
                    writeln!(
                        buf,
                        "     Alternative: {} ({})",
                        alternative.description, alternative.css
                    )
                    .ok();
                }
            }
            if !group.related_issues.is_empty() {
                writeln!(
                    buf,
                    "   Related raw issues: {}",
                    group.related_issues.len()
                )
                .ok();
            }
        }
    }

    for resolution_report in &report.reports {
        writeln!(buf).ok();
        writeln!(buf, "-- {} --", resolution_report.resolution).ok();
        if resolution_report.issues.is_empty() {
            writeln!(buf, "No issues.").ok();
            continue;
        }
        for issue in &resolution_report.issues {
            let components = match &issue.component_b {
                Some(b) => format!("{} + {}", issue.component_a, b),
                None => issue.component_a.clone(),
            };
            writeln!(
                buf,
                "{} {} {}: {}",
                type_icon(issue.issue_type),
                issue.code,
                components,
                issue.message
            )
            .ok();
            for (key, value) in &issue.details {
                writeln!(buf, "   {}: {}", key, value).ok();
            }
        }
    }

    writeln!(buf).ok();
    writeln!(buf, "Responsive issues:").ok();
    if summary.responsive_issues.is_empty() {
        writeln!(buf, "None.").ok();
    } else {
        for issue in &summary.responsive_issues {
            writeln!(
                buf,
                "{} [{}] {}",
                responsive_icon(issue.severity),
                issue.affected_resolutions.join(", "),
                issue.message
            )
            .ok();
        }
    }

    buf
}
