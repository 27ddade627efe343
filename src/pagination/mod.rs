//! Pagination strategies
//!
//! A pagination strategy maps continuous scrollable content into discrete
//! page-like views on a render target. Strategies are capability trait
//! objects selected at runtime by the settings component; the render
//! target is exclusively owned by whichever strategy is active, and
//! ownership transfers explicitly (stop old, start new) during a switch.

mod columns;
mod scroll;
mod target;

pub use columns::ColumnsPaginator;
pub use scroll::ScrollingPaginator;
pub use target::{ColumnLayout, RenderTarget, ScrollLayout, ViewLayout};

#[cfg(test)]
pub(crate) use target::testing;

use async_trait::async_trait;

use crate::error::Result;

/// Where a strategy positions the view when it takes over a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartPosition {
    /// First page of the document.
    FirstPage,
    /// Last page, final column flush with the right content edge.
    LastPage,
    /// Position read from an outgoing strategy during a view switch.
    At(f64),
}

/// Pagination capability
///
/// Implementations configure a render target for paginated display and
/// track progress through it. Positions are normalized scalars measuring
/// viewport units advanced; each strategy documents its exact mapping,
/// and a position read from one strategy is meaningful as the start
/// position of another.
#[async_trait]
pub trait Paginator: Send + Sync {
    /// Stable strategy identifier; also the value the settings component
    /// persists.
    fn name(&self) -> &'static str;

    /// Configure the target's layout for this strategy and position it.
    /// Resolves once layout and positioning are stable.
    async fn start(&mut self, target: &mut dyn RenderTarget, at: StartPosition) -> Result<()>;

    /// Remove this strategy's layout from the target.
    fn stop(&mut self, target: &mut dyn RenderTarget);

    /// Normalized progress through the current document.
    fn current_position(&self, target: &dyn RenderTarget) -> f64;

    /// Whether the view shows the first page.
    fn on_first_page(&self, target: &dyn RenderTarget) -> bool;

    /// Whether the view shows the last page.
    fn on_last_page(&self, target: &dyn RenderTarget) -> bool;

    /// Shift the visible window back by exactly one viewport increment,
    /// clamped at the first page.
    fn go_to_previous_page(&mut self, target: &mut dyn RenderTarget);

    /// Shift the visible window forward by exactly one viewport
    /// increment, clamped at the last page.
    fn go_to_next_page(&mut self, target: &mut dyn RenderTarget);

    /// Jump to an arbitrary position.
    fn go_to_position(&mut self, target: &mut dyn RenderTarget, position: f64);
}
