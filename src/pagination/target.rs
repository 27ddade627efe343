//! Render target boundary
//!
//! The abstract rendered-content view a pagination strategy drives: a
//! mutable style surface plus read-only layout measurements. This is the
//! system's only side-effecting boundary besides the settings store.

use async_trait::async_trait;

use crate::error::Result;

/// Column layout properties applied to the content body.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Width of each generated column; equal to the viewport width.
    pub column_width_px: f64,
    /// Horizontal gap between columns.
    pub column_gap_px: f64,
    /// Fill columns sequentially so content overflows into later columns.
    pub sequential_fill: bool,
    /// Clip content outside the viewport.
    pub hide_overflow: bool,
    /// Force a responsive viewport meta tag into the document head.
    pub responsive_viewport: bool,
}

/// Scroll layout properties applied to the content body.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollLayout {
    /// Force a responsive viewport meta tag into the document head.
    pub responsive_viewport: bool,
}

/// Layout a strategy asks the target to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewLayout {
    Columns(ColumnLayout),
    Scrolling(ScrollLayout),
}

/// Abstract rendered-content view
///
/// Strategies write layout configuration and offsets, and read back
/// measured geometry. Offsets are numeric style values; there is no
/// string encoding to parse, and an offset never written reads as zero.
/// Measurements reflect the most recently applied layout.
#[async_trait]
pub trait RenderTarget: Send + Sync {
    /// Apply a layout to the content body. Resolves when reflow has
    /// settled and measurements are stable.
    async fn apply_layout(&mut self, layout: &ViewLayout) -> Result<()>;

    /// Remove any applied layout properties.
    fn clear_layout(&mut self);

    /// Horizontal offset of the content body (non-positive while
    /// paginated; content is shifted leftward to reveal later pages).
    fn left_px(&self) -> f64;
    fn set_left_px(&mut self, value: f64);

    /// Vertical scroll offset.
    fn scroll_top_px(&self) -> f64;
    fn set_scroll_top_px(&mut self, value: f64);

    /// Total rendered content width.
    fn scroll_width(&self) -> f64;
    /// Total rendered content height.
    fn scroll_height(&self) -> f64;
    /// Visible horizontal extent; the page-to-page step in column layout.
    fn viewport_width(&self) -> f64;
    /// Visible vertical extent.
    fn viewport_height(&self) -> f64;
}
