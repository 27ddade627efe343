//! Shared fixtures for integration tests.

use std::sync::Once;

use async_trait::async_trait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use amnesia_reader::{RenderTarget, Result, ViewLayout};

static INIT: Once = Once::new();

/// Initialize test logging once per binary; `RUST_LOG` overrides.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "amnesia_reader=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

/// Manifest document for a three-chapter publication.
pub const MANIFEST_URL: &str = "https://example.com/pub/whale/manifest.json";

pub const MANIFEST_JSON: &str = r#"{
    "metadata": {
        "title": "The Whale",
        "author": "Herman Melville",
        "language": "en"
    },
    "links": [
        {"rel": "self", "href": "manifest.json", "type": "application/json"}
    ],
    "spine": [
        {"href": "ch1.xhtml", "type": "application/xhtml+xml", "title": "Chapter 1"},
        {"href": "ch2.xhtml", "type": "application/xhtml+xml", "title": "Chapter 2"},
        {"href": "ch3.xhtml", "type": "application/xhtml+xml", "title": "Chapter 3"}
    ],
    "resources": [
        {"rel": "cover", "href": "cover.jpg", "type": "image/jpeg"}
    ],
    "toc": [
        {"href": "ch1.xhtml", "title": "Chapter 1"},
        {"href": "ch2.xhtml", "title": "Chapter 2"},
        {"href": "ch3.xhtml", "title": "Chapter 3"}
    ]
}"#;

/// Fixed-geometry render target, the embedded-frame stand-in.
#[derive(Debug, Default)]
pub struct MockTarget {
    pub left_px: f64,
    pub scroll_top_px: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub applied: Vec<ViewLayout>,
}

impl MockTarget {
    pub fn new(scroll_width: f64, viewport_width: f64) -> Self {
        Self {
            scroll_width,
            viewport_width,
            scroll_height: 3000.0,
            viewport_height: 600.0,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RenderTarget for MockTarget {
    async fn apply_layout(&mut self, layout: &ViewLayout) -> Result<()> {
        self.applied.push(layout.clone());
        Ok(())
    }

    fn clear_layout(&mut self) {}

    fn left_px(&self) -> f64 {
        self.left_px
    }

    fn set_left_px(&mut self, value: f64) {
        self.left_px = value;
    }

    fn scroll_top_px(&self) -> f64 {
        self.scroll_top_px
    }

    fn set_scroll_top_px(&mut self, value: f64) {
        self.scroll_top_px = value;
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}
