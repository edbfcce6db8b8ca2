//! Download URL resolution
//!
//! Stored media records only carry a filename. Absolute download URLs are built at read
//! time from a base URL that is either fixed by configuration or derived from the scheme
//! and host of the incoming request.

use crate::models::{MediaItem, MediaRecord};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Path under which uploaded files are served.
pub const UPLOADS_PATH: &str = "/uploads";

// Characters that cannot appear verbatim in one URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the base of materialized download URLs comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrlPolicy {
    /// Always use this base URL (e.g. `https://api.example.com`)
    Fixed(String),
    /// Use the scheme and host the request arrived on
    FromRequest {
        /// Prefer `X-Forwarded-Proto` / `X-Forwarded-Host` when present
        trust_forwarded_headers: bool,
    },
}

/// Scheme and host information taken from an incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub forwarded_proto: Option<String>,
    pub forwarded_host: Option<String>,
}

impl RequestOrigin {
    pub fn new(scheme: Option<&str>, host: Option<&str>) -> Self {
        Self {
            scheme: scheme.map(String::from),
            host: host.map(String::from),
            ..Default::default()
        }
    }
}

/// First entry of a comma-separated proxy header, trimmed.
fn first_hop(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl BaseUrlPolicy {
    /// Resolve the base URL for one request. Never ends with a slash.
    pub fn resolve(&self, origin: &RequestOrigin) -> String {
        match self {
            BaseUrlPolicy::Fixed(url) => url.trim_end_matches('/').to_string(),
            BaseUrlPolicy::FromRequest {
                trust_forwarded_headers,
            } => {
                let forwarded = |value: &Option<String>| {
                    if *trust_forwarded_headers {
                        first_hop(value).map(String::from)
                    } else {
                        None
                    }
                };
                let scheme = forwarded(&origin.forwarded_proto)
                    .or_else(|| first_hop(&origin.scheme).map(String::from))
                    .unwrap_or_else(|| "http".to_string());
                let host = forwarded(&origin.forwarded_host)
                    .or_else(|| first_hop(&origin.host).map(String::from))
                    .unwrap_or_else(|| "localhost".to_string());
                format!("{}://{}", scheme, host)
                    .trim_end_matches('/')
                    .to_string()
            }
        }
    }
}

/// Builds download URLs for stored filenames under one base URL.
#[derive(Debug, Clone)]
pub struct MediaUrlBuilder {
    base_url: String,
}

impl MediaUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/uploads/{filename}`. An empty filename is not guarded against.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}{}", self.base_url, Self::relative_url(filename))
    }

    /// Server-relative path of an uploaded file: `/uploads/{filename}`, with the filename
    /// percent-encoded as a single path segment.
    pub fn relative_url(filename: &str) -> String {
        format!(
            "{}/{}",
            UPLOADS_PATH,
            utf8_percent_encode(filename, PATH_SEGMENT)
        )
    }

    /// Attach download URLs to records, preserving order.
    pub fn materialize(&self, records: Vec<MediaRecord>) -> Vec<MediaItem> {
        records
            .into_iter()
            .map(|record| {
                let url = self.url_for(&record.filename);
                MediaItem { record, url }
            })
            .collect()
    }
}
