//! Column-based pagination
//!
//! Renders content as viewport-width columns and tracks position through
//! a horizontal offset. The offset is an explicit field on the strategy,
//! mirrored to the target's left style on every mutation; the style
//! surface is never read back as the source of truth.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

use super::target::{ColumnLayout, RenderTarget, ViewLayout};
use super::{Paginator, StartPosition};

/// Column-based pagination strategy
///
/// Pages are viewport-width columns; moving between pages shifts the
/// content body leftward by exactly one viewport width. Offsets are
/// clamped to `[0, scroll_width - viewport_width]`, so stepping past
/// either end holds at the boundary. Positions are page indices:
/// `offset / viewport_width`, integral whenever the offset is
/// page-aligned.
#[derive(Debug, Default)]
pub struct ColumnsPaginator {
    /// Distance the content is shifted leftward, in pixels. Non-negative;
    /// the target's left style receives the negated value.
    offset_px: f64,
}

impl ColumnsPaginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset magnitude in pixels.
    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    /// Greatest valid offset: final column flush with the right edge.
    fn max_offset(target: &dyn RenderTarget) -> f64 {
        (target.scroll_width() - target.viewport_width()).max(0.0)
    }

    fn set_offset(&mut self, target: &mut dyn RenderTarget, offset_px: f64) {
        self.offset_px = offset_px.clamp(0.0, Self::max_offset(target));
        target.set_left_px(-self.offset_px);
    }

    /// Map a page-index position onto an offset. Fractional positions
    /// truncate to the containing page; out-of-range values clamp.
    fn page_offset(target: &dyn RenderTarget, position: f64) -> f64 {
        let width = target.viewport_width();
        if width <= 0.0 {
            return 0.0;
        }
        (position.max(0.0).floor() * width).min(Self::max_offset(target))
    }
}

#[async_trait]
impl Paginator for ColumnsPaginator {
    fn name(&self) -> &'static str {
        "columns"
    }

    async fn start(&mut self, target: &mut dyn RenderTarget, at: StartPosition) -> Result<()> {
        let layout = ColumnLayout {
            column_width_px: target.viewport_width(),
            column_gap_px: 0.0,
            sequential_fill: true,
            hide_overflow: true,
            responsive_viewport: true,
        };
        target.apply_layout(&ViewLayout::Columns(layout)).await?;

        let offset = match at {
            StartPosition::FirstPage => 0.0,
            StartPosition::LastPage => Self::max_offset(target),
            StartPosition::At(position) => Self::page_offset(target, position),
        };
        self.set_offset(target, offset);
        debug!(offset_px = self.offset_px, "columns view started");
        Ok(())
    }

    fn stop(&mut self, target: &mut dyn RenderTarget) {
        target.clear_layout();
        target.set_left_px(0.0);
        self.offset_px = 0.0;
    }

    fn current_position(&self, target: &dyn RenderTarget) -> f64 {
        let width = target.viewport_width();
        if width <= 0.0 {
            0.0
        } else {
            self.offset_px / width
        }
    }

    fn on_first_page(&self, _target: &dyn RenderTarget) -> bool {
        self.offset_px == 0.0
    }

    fn on_last_page(&self, target: &dyn RenderTarget) -> bool {
        self.offset_px + target.viewport_width() >= target.scroll_width()
    }

    fn go_to_previous_page(&mut self, target: &mut dyn RenderTarget) {
        let offset = self.offset_px - target.viewport_width();
        self.set_offset(target, offset);
        debug!(offset_px = self.offset_px, "previous page");
    }

    fn go_to_next_page(&mut self, target: &mut dyn RenderTarget) {
        let offset = self.offset_px + target.viewport_width();
        self.set_offset(target, offset);
        debug!(offset_px = self.offset_px, "next page");
    }

    fn go_to_position(&mut self, target: &mut dyn RenderTarget, position: f64) {
        let offset = Self::page_offset(target, position);
        self.set_offset(target, offset);
        debug!(position, offset_px = self.offset_px, "jumped to position");
    }
}
