//! Reader settings
//!
//! Orchestrates switching between pagination strategies and font-size
//! steps, persisting the user's last choice and notifying an observer.
//! The settings component never does column arithmetic itself; layout
//! and position queries are delegated to whichever strategy is selected.

mod store;

pub use store::{JsonFileStore, MemoryStore, SettingsStore};

use tracing::{debug, info, warn};

use crate::error::{ReaderError, Result};
use crate::pagination::{Paginator, RenderTarget, StartPosition};

/// Store key for the persisted view selection.
pub const SELECTED_VIEW_KEY: &str = "settings-selected-view";

/// Store key for the persisted font-size selection.
pub const SELECTED_FONT_SIZE_KEY: &str = "settings-selected-font-size";

/// A change made through the settings component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChange {
    /// The active pagination strategy changed.
    View { name: &'static str },
    /// The font size stepped to a new value.
    FontSize { px: u16 },
}

type ChangeCallback = Box<dyn Fn(&SettingsChange) + Send + Sync>;

/// Reader settings state machine
///
/// Two independent selection axes over fixed option sets: the active
/// pagination strategy and the font size. Selections restore from the
/// store at construction and persist back on every effective change;
/// boundary no-ops neither persist nor notify.
pub struct BookSettings {
    store: Box<dyn SettingsStore>,
    views: Vec<Box<dyn Paginator>>,
    selected_view: usize,
    font_sizes: Vec<u16>,
    selected_font_size: usize,
    on_change: Option<ChangeCallback>,
}

impl BookSettings {
    /// Create the settings component, restoring persisted selections.
    ///
    /// `views` is the fixed strategy set (first entry is the default);
    /// `font_sizes` the fixed pixel-size set, sorted ascending here. A
    /// persisted selection wins while it is still valid; otherwise the
    /// font size falls back to `default_font_size` when that is a member
    /// of the set, then to the middle of the sorted set. Empty option
    /// sets are an error.
    pub async fn create(
        store: Box<dyn SettingsStore>,
        views: Vec<Box<dyn Paginator>>,
        mut font_sizes: Vec<u16>,
        default_font_size: Option<u16>,
    ) -> Result<Self> {
        if views.is_empty() {
            return Err(ReaderError::Settings(
                "at least one view is required".into(),
            ));
        }
        if font_sizes.is_empty() {
            return Err(ReaderError::Settings(
                "at least one font size is required".into(),
            ));
        }
        font_sizes.sort_unstable();

        let selected_view = match store.get(SELECTED_VIEW_KEY).await? {
            Some(name) => match views.iter().position(|v| v.name() == name) {
                Some(index) => index,
                None => {
                    warn!(view = %name, "persisted view no longer available, using default");
                    0
                }
            },
            None => 0,
        };

        let stored_size = store.get(SELECTED_FONT_SIZE_KEY).await?;
        let selected_font_size =
            resolve_font_size(&font_sizes, stored_size.as_deref(), default_font_size);

        debug!(
            view = views[selected_view].name(),
            font_size_px = font_sizes[selected_font_size],
            "settings restored"
        );

        Ok(Self {
            store,
            views,
            selected_view,
            font_sizes,
            selected_font_size,
            on_change: None,
        })
    }

    /// Register the observer invoked after every effective change.
    pub fn on_change(&mut self, callback: impl Fn(&SettingsChange) + Send + Sync + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Currently selected pagination strategy.
    pub fn selected_view(&self) -> &dyn Paginator {
        self.views[self.selected_view].as_ref()
    }

    /// Mutable access to the selected strategy, for driving page turns.
    pub fn selected_view_mut(&mut self) -> &mut dyn Paginator {
        self.views[self.selected_view].as_mut()
    }

    /// Names of the available strategies, in supplied order.
    pub fn view_names(&self) -> Vec<&'static str> {
        self.views.iter().map(|v| v.name()).collect()
    }

    /// Currently selected font size in pixels.
    pub fn font_size(&self) -> u16 {
        self.font_sizes[self.selected_font_size]
    }

    /// The configured font-size set, ascending.
    pub fn font_sizes(&self) -> &[u16] {
        &self.font_sizes
    }

    /// Whether `increase_font_size` would step (false at the top of the
    /// set; drives the disabled state of the increase control).
    pub fn can_increase_font_size(&self) -> bool {
        self.selected_font_size + 1 < self.font_sizes.len()
    }

    /// Whether `decrease_font_size` would step (false at the bottom).
    pub fn can_decrease_font_size(&self) -> bool {
        self.selected_font_size > 0
    }

    /// Switch the active strategy, preserving the reading position.
    ///
    /// Reads the outgoing strategy's position, stops it, and starts the
    /// incoming strategy at that position; then persists the new name
    /// and notifies. Selecting the already-active view is a no-op.
    pub async fn select_view(
        &mut self,
        target: &mut dyn RenderTarget,
        name: &str,
    ) -> Result<()> {
        let index = self
            .views
            .iter()
            .position(|v| v.name() == name)
            .ok_or_else(|| ReaderError::UnknownView(name.to_string()))?;
        if index == self.selected_view {
            return Ok(());
        }

        let position = self.views[self.selected_view].current_position(target);
        self.views[self.selected_view].stop(target);
        self.views[index]
            .start(target, StartPosition::At(position))
            .await?;
        self.selected_view = index;

        let name = self.views[index].name();
        self.store.set(SELECTED_VIEW_KEY, name).await?;
        info!(view = name, position, "view switched");
        self.notify(SettingsChange::View { name });
        Ok(())
    }

    /// Step one font size up. Returns `false` at the top of the set —
    /// no store write, no notification.
    pub async fn increase_font_size(&mut self) -> Result<bool> {
        if !self.can_increase_font_size() {
            return Ok(false);
        }
        self.select_font_size(self.selected_font_size + 1).await?;
        Ok(true)
    }

    /// Step one font size down. Returns `false` at the bottom of the set.
    pub async fn decrease_font_size(&mut self) -> Result<bool> {
        if !self.can_decrease_font_size() {
            return Ok(false);
        }
        self.select_font_size(self.selected_font_size - 1).await?;
        Ok(true)
    }

    async fn select_font_size(&mut self, index: usize) -> Result<()> {
        self.selected_font_size = index;
        let px = self.font_sizes[index];
        self.store
            .set(SELECTED_FONT_SIZE_KEY, &format!("{px}px"))
            .await?;
        info!(font_size_px = px, "font size changed");
        self.notify(SettingsChange::FontSize { px });
        Ok(())
    }

    fn notify(&self, change: SettingsChange) {
        if let Some(callback) = &self.on_change {
            callback(&change);
        }
    }
}

/// Fallback order: stored value while still a member of the set, then the
/// caller's default while a member, then the middle of the sorted set.
fn resolve_font_size(sizes: &[u16], stored: Option<&str>, default: Option<u16>) -> usize {
    if let Some(raw) = stored {
        match parse_px(raw) {
            Some(px) => {
                if let Some(index) = sizes.iter().position(|&s| s == px) {
                    return index;
                }
                warn!(font_size_px = px, "persisted font size not in configured set");
            }
            None => warn!(value = %raw, "malformed persisted font size"),
        }
    }
    if let Some(px) = default {
        if let Some(index) = sizes.iter().position(|&s| s == px) {
            return index;
        }
    }
    sizes.len() / 2
}

/// Parse a stored font size, e.g. `"16px"`. Bare numbers are accepted.
fn parse_px(value: &str) -> Option<u16> {
    let value = value.trim();
    let digits = value.strip_suffix("px").unwrap_or(value);
    digits.trim().parse().ok()
}
