//! Manifest data types
//!
//! Wire types for the publication manifest document. Every field is
//! optional on the wire; absent fields deserialize to their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication metadata
///
/// Descriptive only; nothing here carries invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    /// Publication title
    pub title: Option<String>,
    /// Primary author
    pub author: Option<String>,
    /// Unique identifier (ISBN, UUID, etc.)
    pub identifier: Option<String>,
    /// Primary language
    pub language: Option<String>,
    /// Last modification timestamp
    pub modified: Option<DateTime<Utc>>,
}

/// An addressable resource in the manifest
///
/// Hrefs are stored raw; identity for lookup is the href resolved against
/// the manifest base URL, never the raw string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    /// Relation of this link to the publication (self, cover, contents, ...)
    pub rel: Option<String>,
    /// Resource href, relative to the manifest base URL
    pub href: Option<String>,
    /// MIME type
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Display title
    pub title: Option<String>,
}
