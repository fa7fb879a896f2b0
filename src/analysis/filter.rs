//! Reduces a raw per-resolution issue list to a bounded, deduplicated,
//! priority-ordered list for automated consumers.

use std::collections::HashSet;

use crate::types::{Issue, IssueCode, IssueType};

/// Hard cap on the filtered list; lowest-priority entries are cut first.
pub const MAX_FILTERED_ISSUES: usize = 50;

fn type_rank(issue_type: IssueType) -> u8 {
    match issue_type {
        IssueType::Error => 0,
        IssueType::Warning => 1,
        IssueType::Info => 2,
    }
}

/// Unordered pair key, namespaced by code so families never collide.
fn pair_key(issue: &Issue) -> String {
    let a = issue.component_a.as_str();
    let b = issue.component_b.as_deref().unwrap_or("");
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    format!("{first}\u{1}{second}\u{1}{}", issue.code.as_str())
}

/// Filter one resolution's raw issues for automated consumption.
///
/// Errors sort before warnings before info (stable within a type).
/// Alignment confirmations are noise and dropped outright. Overlap and
/// tight-spacing findings keep one entry per unordered component pair;
/// viewport overflow keeps one entry per component. Everything else passes
/// through. The result is capped at [`MAX_FILTERED_ISSUES`]. Pure and
/// idempotent: filtering a filtered list is a no-op.
pub fn filter_for_automation(issues: Vec<Issue>) -> Vec<Issue> {
    let mut sorted = issues;
    sorted.sort_by_key(|issue| type_rank(issue.issue_type));

    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<Issue> = Vec::with_capacity(sorted.len().min(MAX_FILTERED_ISSUES));

    for issue in sorted {
        let dedup_key = match &issue.code {
            IssueCode::AlignmentConfirmed => continue,
            IssueCode::SpacingTight | IssueCode::Overlap => Some(pair_key(&issue)),
            IssueCode::ViewportOverflow => Some(format!(
                "{}\u{1}{}",
                issue.component_a,
                issue.code.as_str()
            )),
            _ => None,
        };
        if let Some(key) = dedup_key {
            if !seen.insert(key) {
                continue;
            }
        }
        kept.push(issue);
    }

    kept.truncate(MAX_FILTERED_ISSUES);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(a: &str, b: &str) -> Issue {
        Issue::pair(IssueCode::Overlap, IssueType::Error, a, b, "overlap")
    }

    fn spacing(a: &str, b: &str) -> Issue {
        Issue::pair(IssueCode::SpacingTight, IssueType::Warning, a, b, "tight spacing")
    }

    fn overflow(a: &str) -> Issue {
        Issue::single(IssueCode::ViewportOverflow, IssueType::Error, a, "overflow")
    }

    fn alignment(a: &str, b: &str) -> Issue {
        Issue::pair(IssueCode::AlignmentConfirmed, IssueType::Info, a, b, "aligned")
    }

    #[test]
    fn orders_errors_then_warnings_then_info() {
        let issues = vec![
            Issue::single(IssueCode::from("I900"), IssueType::Info, "a", "note"),
            spacing("a", "b"),
            overflow("c"),
        ];
        let filtered = filter_for_automation(issues);
        let types: Vec<IssueType> = filtered.iter().map(|i| i.issue_type).collect();
        assert_eq!(types, vec![IssueType::Error, IssueType::Warning, IssueType::Info]);
    }

    #[test]
    fn spacing_pair_collapses_in_either_order() {
        let issues = vec![spacing("a", "b"), spacing("b", "a"), spacing("a", "b")];
        let filtered = filter_for_automation(issues);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].component_a, "a");
    }

    #[test]
    fn overlap_pair_canonicalizes_reversed_duplicates() {
        let issues = vec![overlap("header", "nav"), overlap("nav", "header")];
        let filtered = filter_for_automation(issues);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn overlap_and_spacing_keys_do_not_collide() {
        let issues = vec![overlap("a", "b"), spacing("a", "b")];
        let filtered = filter_for_automation(issues);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn overflow_keeps_one_per_component() {
        let issues = vec![overflow("hero"), overflow("hero"), overflow("footer")];
        let filtered = filter_for_automation(issues);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn alignment_confirmations_always_dropped() {
        let issues = vec![
            alignment("a", "b"),
            alignment("c", "d"),
            overflow("hero"),
        ];
        let filtered = filter_for_automation(issues);
        assert_eq!(filtered.len(), 1);
        assert!(filtered
            .iter()
            .all(|i| i.code != IssueCode::AlignmentConfirmed));
    }

    #[test]
    fn caps_at_fifty_dropping_lowest_priority() {
        let mut issues = Vec::new();
        for i in 0..20 {
            issues.push(Issue::single(
                IssueCode::from(format!("E9{i:02}").as_str()),
                IssueType::Error,
                format!("e{i}"),
                "err",
            ));
        }
        for i in 0..20 {
            issues.push(Issue::single(
                IssueCode::from(format!("W9{i:02}").as_str()),
                IssueType::Warning,
                format!("w{i}"),
                "warn",
            ));
        }
        for i in 0..20 {
            issues.push(Issue::single(
                IssueCode::from(format!("I9{i:02}").as_str()),
                IssueType::Info,
                format!("i{i}"),
                "info",
            ));
        }

        let filtered = filter_for_automation(issues);
        assert_eq!(filtered.len(), MAX_FILTERED_ISSUES);
        assert!(filtered[..20].iter().all(|i| i.issue_type == IssueType::Error));
        assert!(filtered[20..40]
            .iter()
            .all(|i| i.issue_type == IssueType::Warning));
        assert!(filtered[40..].iter().all(|i| i.issue_type == IssueType::Info));
        assert_eq!(filtered[40..].len(), 10);
    }

    #[test]
    fn sort_is_stable_within_a_type() {
        let issues = vec![
            Issue::single(IssueCode::from("E901"), IssueType::Error, "first", "a"),
            Issue::single(IssueCode::from("E902"), IssueType::Error, "second", "b"),
            Issue::single(IssueCode::from("E903"), IssueType::Error, "third", "c"),
        ];
        let filtered = filter_for_automation(issues);
        let names: Vec<&str> = filtered.iter().map(|i| i.component_a.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let issues = vec![
            overlap("a", "b"),
            overlap("b", "a"),
            spacing("a", "b"),
            overflow("hero"),
            alignment("a", "b"),
            Issue::single(IssueCode::from("I900"), IssueType::Info, "x", "note"),
        ];
        let once = filter_for_automation(issues);
        let twice = filter_for_automation(once.clone());
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.code, b.code);
            assert_eq!(a.component_a, b.component_a);
            assert_eq!(a.component_b, b.component_b);
        }
    }
}
