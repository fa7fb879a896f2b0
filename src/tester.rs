//! Drives per-resolution rendering and assembles the unified report.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::analysis::{analyze_responsive, build_summary, filter_for_automation};
use crate::catalog::IssueCatalog;
use crate::config::TesterOptions;
use crate::error::{Result, RlaError};
use crate::format::format_report;
use crate::grouping::IssueGrouper;
use crate::renderer::Renderer;
use crate::report_gen::{ReportGenerator, ReportOptions};
use crate::resolution::Resolution;
use crate::types::{MultiResolutionReport, ResolutionReport};

/// Progress sink, invoked with one-line status messages.
pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Orchestrates the full pipeline: render each configured resolution in
/// order, filter each raw issue list, derive responsive issues, collect
/// grouped issues, score, and assemble the final report.
///
/// The renderer is a scoped resource: initialized at entry and released on
/// every exit path. Resolutions are tested strictly sequentially so exactly
/// one renderer session is live at a time.
pub struct MultiResolutionTester<R, G> {
    renderer: R,
    grouper: G,
    options: TesterOptions,
    catalog: IssueCatalog,
    report_generator: Option<Box<dyn ReportGenerator>>,
    progress: Option<ProgressCallback>,
}

impl<R: Renderer, G: IssueGrouper> MultiResolutionTester<R, G> {
    pub fn new(renderer: R, grouper: G) -> Self {
        Self::with_options(renderer, grouper, TesterOptions::default())
    }

    pub fn with_options(renderer: R, grouper: G, options: TesterOptions) -> Self {
        let mut catalog = IssueCatalog::builtin();
        catalog.extend(options.error_codes.clone());
        Self {
            renderer,
            grouper,
            options,
            catalog,
            report_generator: None,
            progress: None,
        }
    }

    /// Attach the external report generator used when HTML report
    /// generation is enabled in the options.
    pub fn with_report_generator(mut self, generator: Box<dyn ReportGenerator>) -> Self {
        self.report_generator = Some(generator);
        self
    }

    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn options(&self) -> &TesterOptions {
        &self.options
    }

    pub fn catalog(&self) -> &IssueCatalog {
        &self.catalog
    }

    /// Test `markup` at every configured resolution and return the unified
    /// report. All-or-nothing: the first failure aborts the remaining
    /// resolutions and propagates; partial reports are discarded. The
    /// renderer is released in both cases.
    pub async fn test_all_resolutions(&mut self, markup: &str) -> Result<MultiResolutionReport> {
        self.options.validate()?;
        if self.options.generate_html_report && self.report_generator.is_none() {
            return Err(RlaError::config(
                "report generation requires an attached report generator",
            ));
        }

        let started = Instant::now();
        self.renderer.initialize().await?;
        let outcome = self.run_pipeline(markup, started).await;
        let released = self.renderer.cleanup().await;
        let report = outcome?;
        released?;
        Ok(report)
    }

    /// Render `markup` at exactly one resolution and return the raw report.
    /// No filtering, grouping, or responsive analysis is applied.
    pub async fn test_single_resolution(
        &mut self,
        markup: &str,
        resolution: &Resolution,
    ) -> Result<ResolutionReport> {
        self.renderer.initialize().await?;
        let outcome = self
            .renderer
            .render_component(markup, resolution, self.options.timeout)
            .await;
        let released = self.renderer.cleanup().await;
        let report = outcome?;
        released?;
        Ok(report)
    }

    /// Plain-text rendering of an assembled report.
    pub fn format_report(report: &MultiResolutionReport) -> String {
        format_report(report)
    }

    async fn run_pipeline(
        &mut self,
        markup: &str,
        started: Instant,
    ) -> Result<MultiResolutionReport> {
        let resolutions = self.options.resolutions.clone();
        let mut reports: Vec<ResolutionReport> = Vec::with_capacity(resolutions.len());
        let mut screenshot_paths: BTreeMap<String, PathBuf> = BTreeMap::new();

        for resolution in &resolutions {
            self.log(&format!("Rendering at {}", resolution));
            let mut report = self
                .renderer
                .render_component(markup, resolution, self.options.timeout)
                .await?;

            if self.options.capture_screenshots {
                let path = self.capture_screenshot(resolution).await?;
                screenshot_paths.insert(resolution.name.clone(), path);
            }

            for issue in &mut report.issues {
                if let Some(issue_type) = self.catalog.classify(&issue.code) {
                    issue.issue_type = issue_type;
                }
            }
            report.issues = filter_for_automation(std::mem::take(&mut report.issues));
            reports.push(report);
        }

        let responsive_issues = analyze_responsive(&reports);
        self.log(&format!(
            "Derived {} responsive issue(s) across {} resolution(s)",
            responsive_issues.len(),
            reports.len()
        ));

        let mut grouped_issues = Vec::new();
        for report in &reports {
            let groups = self
                .grouper
                .group_issues(&report.issues, &report.resolution)?;
            grouped_issues.extend(groups);
        }

        let summary = build_summary(&reports, responsive_issues, &grouped_issues);
        let report = MultiResolutionReport {
            reports,
            grouped_issues,
            summary,
            timestamp: epoch_millis(),
            total_render_time_ms: started.elapsed().as_millis() as u64,
        };

        if self.options.generate_html_report {
            if let Some(generator) = &self.report_generator {
                let output_path = self
                    .options
                    .output_path
                    .clone()
                    .ok_or_else(|| RlaError::config("report generation requires an output path"))?;
                let generated = generator.generate_report(
                    &report,
                    &ReportOptions {
                        output_path,
                        project_name: self.options.project_name.clone(),
                        include_screenshots: self.options.capture_screenshots,
                        screenshot_paths,
                    },
                )?;
                self.log(&format!("Report written to {}", generated.display()));
            }
        }

        Ok(report)
    }

    async fn capture_screenshot(&mut self, resolution: &Resolution) -> Result<PathBuf> {
        let dir = self
            .options
            .output_path
            .clone()
            .ok_or_else(|| RlaError::config("screenshot capture requires an output path"))?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!(
            "screenshot-{}-{}.png",
            resolution.name,
            epoch_millis()
        ));
        self.renderer.take_screenshot(&path).await?;
        self.log(&format!("Captured {}", path.display()));
        Ok(path)
    }

    fn log(&self, message: &str) {
        if let Some(progress) = &self.progress {
            progress(message);
        }
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
