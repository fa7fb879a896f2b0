//! Orchestrator options, with optional TOML file loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::catalog::CatalogEntry;
use crate::error::{Result, RlaError};
use crate::resolution::{default_resolutions, Resolution};

/// Default per-render timeout handed to the renderer.
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound for an iterative fix-and-retest loop.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Options recognized by [`crate::tester::MultiResolutionTester`].
#[derive(Debug, Clone)]
pub struct TesterOptions {
    /// Resolutions to test, in order. Defaults to mobile/tablet/desktop.
    pub resolutions: Vec<Resolution>,
    /// Bounds a single render call, not the whole pipeline.
    pub timeout: Duration,
    /// Upper bound for an iterative fix-and-retest loop. Accepted but not
    /// currently wired into the pipeline.
    pub max_iterations: u32,
    /// Reserved for a file-watch mode; accepted but not consumed.
    pub watch_paths: Vec<PathBuf>,
    /// Capture one screenshot per resolution into `output_path`.
    pub capture_screenshots: bool,
    /// Hand the assembled report to the attached report generator.
    pub generate_html_report: bool,
    /// Output directory for screenshots and generated reports.
    pub output_path: Option<PathBuf>,
    pub project_name: Option<String>,
    /// Catalog extensions/overrides, keyed by code.
    pub error_codes: BTreeMap<String, CatalogEntry>,
}

impl Default for TesterOptions {
    fn default() -> Self {
        Self {
            resolutions: default_resolutions(),
            timeout: DEFAULT_RENDER_TIMEOUT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            watch_paths: Vec::new(),
            capture_screenshots: false,
            generate_html_report: false,
            output_path: None,
            project_name: None,
            error_codes: BTreeMap::new(),
        }
    }
}

impl TesterOptions {
    /// Load options from a TOML file, merged over defaults.
    ///
    /// With no explicit path the defaults are returned as-is. Durations use
    /// humantime strings (`timeout = "5s"`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let data = std::fs::read_to_string(path).map_err(|e| {
            RlaError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let file: OptionsFile = toml::from_str(&data).map_err(|e| {
            RlaError::Config(format!("Invalid config {}: {}", path.display(), e))
        })?;

        let defaults = Self::default();
        let options = Self {
            resolutions: file.resolutions.unwrap_or(defaults.resolutions),
            timeout: file.timeout.unwrap_or(defaults.timeout),
            max_iterations: file.max_iterations.unwrap_or(defaults.max_iterations),
            watch_paths: file.watch_paths.unwrap_or_default(),
            capture_screenshots: file.capture_screenshots.unwrap_or(false),
            generate_html_report: file.generate_html_report.unwrap_or(false),
            output_path: file.output_path,
            project_name: file.project_name,
            error_codes: file.error_codes,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolutions.is_empty() {
            return Err(RlaError::config("no resolutions configured"));
        }
        for resolution in &self.resolutions {
            if resolution.width == 0 || resolution.height == 0 {
                return Err(RlaError::Config(format!(
                    "resolution \"{}\" has zero-sized dimensions",
                    resolution.name
                )));
            }
        }
        if self.capture_screenshots && self.output_path.is_none() {
            return Err(RlaError::config(
                "screenshot capture requires an output path",
            ));
        }
        if self.generate_html_report && self.output_path.is_none() {
            return Err(RlaError::config(
                "report generation requires an output path",
            ));
        }
        Ok(())
    }
}

/// On-disk shape: every field optional, merged over defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsFile {
    #[serde(default)]
    resolutions: Option<Vec<Resolution>>,
    #[serde(default, with = "humantime_serde::option")]
    timeout: Option<Duration>,
    #[serde(default)]
    max_iterations: Option<u32>,
    #[serde(default)]
    watch_paths: Option<Vec<PathBuf>>,
    #[serde(default)]
    capture_screenshots: Option<bool>,
    #[serde(default)]
    generate_html_report: Option<bool>,
    #[serde(default)]
    output_path: Option<PathBuf>,
    #[serde(default)]
    project_name: Option<String>,
    #[serde(default)]
    error_codes: BTreeMap<String, CatalogEntry>,
}
