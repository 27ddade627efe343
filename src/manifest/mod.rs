//! Publication manifest and spine navigation
//!
//! A read-only view over a publication's structure: metadata, resource
//! links, and the spine (linear reading order). Constructed once from a
//! fetched manifest document plus its source URL; immutable thereafter.
//! Hrefs resolve against that URL so lookups compare absolute identities.

mod href;
mod types;

pub use href::resolve;
pub use types::{Link, Metadata};

use serde::Deserialize;

use crate::error::{ReaderError, Result};

/// Structured index of a publication: metadata, resources, and navigation
///
/// The four sequences keep the order of the source document. The spine
/// defines linear reading order; index 0 is the canonical start.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Publication metadata
    pub metadata: Metadata,
    /// General links (self, alternate, search, ...)
    pub links: Vec<Link>,
    /// Linear reading order
    pub spine: Vec<Link>,
    /// Auxiliary resources (stylesheets, images, fonts)
    pub resources: Vec<Link>,
    /// Table of contents
    pub toc: Vec<Link>,
    base_url: String,
}

/// Wire shape of the manifest document. Absent fields default to empty;
/// no other shape is accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawManifest {
    metadata: Metadata,
    links: Vec<Link>,
    spine: Vec<Link>,
    resources: Vec<Link>,
    toc: Vec<Link>,
}

impl Manifest {
    /// Build a manifest from a JSON document and its source URL.
    pub fn from_json(document: &str, base_url: impl Into<String>) -> Result<Self> {
        let raw: RawManifest = serde_json::from_str(document)
            .map_err(|e| ReaderError::InvalidManifest(e.to_string()))?;
        Ok(Self::from_raw(raw, base_url.into()))
    }

    /// Build a manifest from an already-parsed JSON value and its source URL.
    pub fn from_value(document: serde_json::Value, base_url: impl Into<String>) -> Result<Self> {
        let raw: RawManifest = serde_json::from_value(document)
            .map_err(|e| ReaderError::InvalidManifest(e.to_string()))?;
        Ok(Self::from_raw(raw, base_url.into()))
    }

    fn from_raw(raw: RawManifest, base_url: String) -> Self {
        Self {
            metadata: raw.metadata,
            links: raw.links,
            spine: raw.spine,
            resources: raw.resources,
            toc: raw.toc,
            base_url,
        }
    }

    /// The URL this manifest was fetched from; hrefs resolve against it.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// First spine entry, or `None` when the spine is empty.
    pub fn start_link(&self) -> Option<&Link> {
        self.spine.first()
    }

    /// Index of the spine entry whose resolved href equals `href`.
    ///
    /// `href` must already be absolute; every spine entry is resolved
    /// against the base URL before comparison. Linear scan, first match —
    /// spines are chapter-sized.
    pub fn spine_index(&self, href: &str) -> Option<usize> {
        self.spine.iter().position(|link| {
            link.href
                .as_deref()
                .is_some_and(|h| resolve(&self.base_url, h) == href)
        })
    }

    /// Spine entry before the one at `href`; `None` at the start of the
    /// book or when `href` is not in the spine.
    pub fn previous_spine_item(&self, href: &str) -> Option<&Link> {
        let index = self.spine_index(href)?;
        index.checked_sub(1).and_then(|i| self.spine.get(i))
    }

    /// Spine entry after the one at `href`; `None` at the end of the
    /// book or when `href` is not in the spine.
    pub fn next_spine_item(&self, href: &str) -> Option<&Link> {
        let index = self.spine_index(href)?;
        self.spine.get(index + 1)
    }

    /// First link across links, spine, and resources carrying `rel`.
    pub fn link_with_rel(&self, rel: &str) -> Option<&Link> {
        self.links
            .iter()
            .chain(&self.spine)
            .chain(&self.resources)
            .find(|link| link.rel.as_deref() == Some(rel))
    }

    /// Resource lookup by resolved absolute href.
    pub fn resource(&self, href: &str) -> Option<&Link> {
        self.resources.iter().find(|link| {
            link.href
                .as_deref()
                .is_some_and(|h| resolve(&self.base_url, h) == href)
        })
    }
}
