//! Derives defects that only exist when comparing resolutions against each
//! other: components that vanish, overflow at some sizes only, or change
//! area disproportionately.

use std::collections::{HashMap, HashSet};

use crate::types::{
    IssueCode, ResolutionReport, ResponsiveIssue, ResponsiveIssueKind, ResponsiveSeverity,
};

/// A component whose area grows or shrinks by more than this factor across
/// resolutions is flagged. Strictly greater-than; a ratio of exactly 3 is
/// acceptable proportional reflow.
pub const AREA_RATIO_LIMIT: f32 = 3.0;

/// Compare one run's resolution reports and derive cross-cutting issues.
///
/// Three independent heuristics run unconditionally over the same input;
/// a component may appear in more than one emitted issue. Output order is
/// deterministic: heuristic order, then first-seen component order.
pub fn analyze_responsive(reports: &[ResolutionReport]) -> Vec<ResponsiveIssue> {
    let mut issues = Vec::new();
    issues.extend(detect_layout_breaks(reports));
    issues.extend(detect_partial_overflow(reports));
    issues.extend(detect_spacing_inconsistencies(reports));
    issues
}

/// Components measured at some resolutions but missing from others.
fn detect_layout_breaks(reports: &[ResolutionReport]) -> Vec<ResponsiveIssue> {
    let mut order: Vec<&str> = Vec::new();
    let mut present: HashMap<&str, HashSet<&str>> = HashMap::new();

    for report in reports {
        for measurement in &report.components {
            let component = measurement.component.as_str();
            present
                .entry(component)
                .or_insert_with(|| {
                    order.push(component);
                    HashSet::new()
                })
                .insert(report.resolution.name.as_str());
        }
    }

    let mut issues = Vec::new();
    for component in order {
        let seen_at = &present[component];
        let absent: Vec<&str> = reports
            .iter()
            .map(|r| r.resolution.name.as_str())
            .filter(|name| !seen_at.contains(name))
            .collect();
        if absent.is_empty() {
            continue;
        }
        let visible: Vec<&str> = reports
            .iter()
            .map(|r| r.resolution.name.as_str())
            .filter(|name| seen_at.contains(name))
            .collect();
        issues.push(ResponsiveIssue {
            kind: ResponsiveIssueKind::LayoutBreak,
            message: format!(
                "Component \"{}\" disappears at {} but remains visible at {}",
                component,
                absent.join(", "),
                visible.join(", ")
            ),
            affected_resolutions: absent.iter().map(|s| s.to_string()).collect(),
            component: component.to_string(),
            severity: ResponsiveSeverity::High,
        });
    }
    issues
}

/// Components that overflow the viewport at some, but not all, resolutions.
/// Uniform overflow at every size is treated as a possibly-intentional
/// design choice and left alone.
fn detect_partial_overflow(reports: &[ResolutionReport]) -> Vec<ResponsiveIssue> {
    let total = reports.len();
    let mut order: Vec<&str> = Vec::new();
    let mut overflowing: HashMap<&str, Vec<&str>> = HashMap::new();

    for report in reports {
        for issue in &report.issues {
            if issue.code != IssueCode::ViewportOverflow {
                continue;
            }
            let component = issue.component_a.as_str();
            let resolutions = overflowing.entry(component).or_insert_with(|| {
                order.push(component);
                Vec::new()
            });
            let name = report.resolution.name.as_str();
            if !resolutions.contains(&name) {
                resolutions.push(name);
            }
        }
    }

    let mut issues = Vec::new();
    for component in order {
        let affected = &overflowing[component];
        if affected.is_empty() || affected.len() >= total {
            continue;
        }
        issues.push(ResponsiveIssue {
            kind: ResponsiveIssueKind::Overflow,
            message: format!(
                "Component \"{}\" overflows the viewport at {}",
                component,
                affected.join(", ")
            ),
            affected_resolutions: affected.iter().map(|s| s.to_string()).collect(),
            component: component.to_string(),
            severity: ResponsiveSeverity::Medium,
        });
    }
    issues
}

/// Components whose rendered area jumps disproportionately between sizes.
/// A coarse geometric heuristic: proportional reflow passes, extreme jumps
/// past [`AREA_RATIO_LIMIT`] are flagged.
fn detect_spacing_inconsistencies(reports: &[ResolutionReport]) -> Vec<ResponsiveIssue> {
    let mut order: Vec<&str> = Vec::new();
    let mut areas: HashMap<&str, Vec<(&str, f32)>> = HashMap::new();

    for report in reports {
        for measurement in &report.components {
            let component = measurement.component.as_str();
            areas
                .entry(component)
                .or_insert_with(|| {
                    order.push(component);
                    Vec::new()
                })
                .push((report.resolution.name.as_str(), measurement.area()));
        }
    }

    let mut issues = Vec::new();
    for component in order {
        let samples = &areas[component];
        if samples.len() < 2 {
            continue;
        }
        let mut min = &samples[0];
        let mut max = &samples[0];
        for sample in &samples[1..] {
            if sample.1 < min.1 {
                min = sample;
            }
            if sample.1 > max.1 {
                max = sample;
            }
        }
        // Zero-area min with a positive max yields an infinite ratio and is
        // flagged; all-zero areas yield NaN and are not.
        let ratio = max.1 / min.1;
        if ratio > AREA_RATIO_LIMIT {
            issues.push(ResponsiveIssue {
                kind: ResponsiveIssueKind::SpacingInconsistency,
                message: format!(
                    "Component \"{}\" changes area {:.1}x between {} ({:.0}px\u{b2}) and {} ({:.0}px\u{b2})",
                    component, ratio, min.0, min.1, max.0, max.1
                ),
                affected_resolutions: vec![min.0.to_string(), max.0.to_string()],
                component: component.to_string(),
                severity: ResponsiveSeverity::Medium,
            });
        }
    }
    issues
}
