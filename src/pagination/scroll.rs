//! Continuous-scroll pagination
//!
//! The vertical counterpart to the column strategy: content flows in a
//! single scrollable column and pages are viewport-height steps. The
//! scroll offset lives on the target because the user scrolls it
//! directly; this strategy only steps and clamps it.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

use super::target::{RenderTarget, ScrollLayout, ViewLayout};
use super::{Paginator, StartPosition};

/// Continuous-scroll strategy
///
/// Positions are viewport-heights scrolled: `scroll_top /
/// viewport_height`, continuous rather than page-aligned.
#[derive(Debug, Default)]
pub struct ScrollingPaginator;

impl ScrollingPaginator {
    pub fn new() -> Self {
        Self
    }

    fn max_scroll_top(target: &dyn RenderTarget) -> f64 {
        (target.scroll_height() - target.viewport_height()).max(0.0)
    }

    fn set_scroll_top(target: &mut dyn RenderTarget, value: f64) {
        let clamped = value.clamp(0.0, Self::max_scroll_top(target));
        target.set_scroll_top_px(clamped);
    }
}

#[async_trait]
impl Paginator for ScrollingPaginator {
    fn name(&self) -> &'static str {
        "scrolling"
    }

    async fn start(&mut self, target: &mut dyn RenderTarget, at: StartPosition) -> Result<()> {
        let layout = ScrollLayout {
            responsive_viewport: true,
        };
        target.apply_layout(&ViewLayout::Scrolling(layout)).await?;

        let top = match at {
            StartPosition::FirstPage => 0.0,
            StartPosition::LastPage => Self::max_scroll_top(target),
            StartPosition::At(position) => position.max(0.0) * target.viewport_height(),
        };
        Self::set_scroll_top(target, top);
        debug!(scroll_top_px = target.scroll_top_px(), "scrolling view started");
        Ok(())
    }

    fn stop(&mut self, target: &mut dyn RenderTarget) {
        target.clear_layout();
        target.set_scroll_top_px(0.0);
    }

    fn current_position(&self, target: &dyn RenderTarget) -> f64 {
        let height = target.viewport_height();
        if height <= 0.0 {
            0.0
        } else {
            target.scroll_top_px() / height
        }
    }

    fn on_first_page(&self, target: &dyn RenderTarget) -> bool {
        target.scroll_top_px() == 0.0
    }

    fn on_last_page(&self, target: &dyn RenderTarget) -> bool {
        target.scroll_top_px() + target.viewport_height() >= target.scroll_height()
    }

    fn go_to_previous_page(&mut self, target: &mut dyn RenderTarget) {
        let step = target.viewport_height();
        let top = target.scroll_top_px() - step;
        Self::set_scroll_top(target, top);
        debug!(scroll_top_px = target.scroll_top_px(), "previous page");
    }

    fn go_to_next_page(&mut self, target: &mut dyn RenderTarget) {
        let step = target.viewport_height();
        let top = target.scroll_top_px() + step;
        Self::set_scroll_top(target, top);
        debug!(scroll_top_px = target.scroll_top_px(), "next page");
    }

    fn go_to_position(&mut self, target: &mut dyn RenderTarget, position: f64) {
        let top = position.max(0.0) * target.viewport_height();
        Self::set_scroll_top(target, top);
        debug!(position, scroll_top_px = target.scroll_top_px(), "jumped to position");
    }
}
