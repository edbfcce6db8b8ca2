use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Media type enum
///
/// Assigned at upload time from the declared content type and stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Classify an upload by its declared content type.
    ///
    /// Anything whose MIME type mentions "video" is a video; everything else is an image.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.contains("video") {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Persisted metadata for one uploaded asset.
///
/// Records never carry a download URL; unknown fields (such as a `url` echoed back by
/// clients) are dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaRecord {
    /// Identifier assigned at upload time; the delete key
    pub id: String,
    /// Name of the file inside the content directory
    pub filename: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// A media record with its resolved download URL, as returned on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    #[serde(flatten)]
    pub record: MediaRecord,
    /// Absolute download URL, computed at read time
    pub url: String,
}
