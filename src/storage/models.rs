use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which kind of entity owns a media partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Member,
    Memory,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Member => "member",
            Category::Memory => "memory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Category::Member),
            "memory" => Ok(Category::Memory),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// Kind of an uploaded media asset, as reported by the upload provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Infer a kind from a hosted media URL's extension. Upload providers in
    /// "auto" mode sometimes omit the resource type; anything that does not
    /// guess as video is treated as an image.
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        match mime_guess::from_path(path).first() {
            Some(mime) if mime.type_() == mime_guess::mime::VIDEO => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded media record stored in redb.
///
/// `(parent_id, category)` identifies the owning partition; ordering within a
/// partition is by `timestamp` descending (newest first). The id is assigned
/// by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: String,
    pub parent_id: u32,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub storage_path: String,
    pub caption: String,
    pub scale: f32,
    pub position: String,
    /// Unix milliseconds, assigned at write time. Sole sort key.
    pub timestamp: i64,
}

/// Replace-on-write cover image override, keyed by `"{category}-{parent_id}"`.
/// At most one per key; writing replaces the prior value with no history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverOverride {
    pub url: String,
    pub storage_path: String,
    pub scale: f32,
    pub position: String,
    pub timestamp: i64,
}

/// Key shared by the partition index and the covers table.
pub fn partition_key(parent_id: u32, category: Category) -> String {
    format!("{category}-{parent_id}")
}

/// Inverse of [`partition_key`]. None for malformed keys.
pub fn parse_partition_key(key: &str) -> Option<(u32, Category)> {
    let (category, parent_id) = key.split_once('-')?;
    Some((parent_id.parse().ok()?, category.parse().ok()?))
}

pub fn default_scale() -> f32 {
    1.0
}

pub fn default_position() -> String {
    "center".to_string()
}

/// Caption applied when none is supplied at creation.
pub fn default_caption(kind: MediaKind) -> String {
    format!("Uploaded {kind}")
}
