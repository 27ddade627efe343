//! Amnesia Reader Core
//!
//! The reader-view core of the Amnesia ebook platform: pagination
//! strategies driving an abstract render target, the publication manifest
//! navigation model, and the reader settings component with persistence.
//!
//! # Modules
//!
//! - `manifest`: read-only publication manifest and spine navigation
//! - `pagination`: pagination strategies and the render-target boundary
//! - `settings`: reader settings state machine and settings stores

pub mod error;
pub mod manifest;
pub mod pagination;
pub mod settings;

pub use error::{ReaderError, Result};
pub use manifest::{Link, Manifest, Metadata};
pub use pagination::{
    ColumnLayout, ColumnsPaginator, Paginator, RenderTarget, ScrollLayout, ScrollingPaginator,
    StartPosition, ViewLayout,
};
pub use settings::{
    BookSettings, JsonFileStore, MemoryStore, SettingsChange, SettingsStore,
    SELECTED_FONT_SIZE_KEY, SELECTED_VIEW_KEY,
};
