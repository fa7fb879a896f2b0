//! Contract for the external headless rendering engine.
//!
//! The renderer turns a complete markup document plus a resolution into
//! measured component geometry and a base per-resolution issue list. The
//! orchestrator treats it as a scoped resource: `initialize` at entry,
//! `cleanup` on every exit path, never more than one live session per run.

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::resolution::Resolution;
use crate::types::ResolutionReport;

#[allow(async_fn_in_trait)]
pub trait Renderer {
    /// Acquire the rendering context. Called once per orchestrator entry.
    async fn initialize(&mut self) -> Result<()>;

    /// Render `markup` at `resolution`, bounded by `timeout` for this one
    /// call. Returns measurements and raw findings; detection failures are
    /// findings, rendering failures are errors.
    async fn render_component(
        &mut self,
        markup: &str,
        resolution: &Resolution,
        timeout: Duration,
    ) -> Result<ResolutionReport>;

    /// Capture the current session's viewport to `path`.
    async fn take_screenshot(&mut self, path: &Path) -> Result<()>;

    /// Release the rendering context. Invoked on success and failure alike.
    async fn cleanup(&mut self) -> Result<()>;
}
