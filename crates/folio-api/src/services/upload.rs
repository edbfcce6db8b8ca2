//! Upload ingestion
//!
//! Assigns each upload a fresh identifier, streams it into the content directory as
//! `{id}{extension}` and classifies it by declared content type. Ingestion never touches
//! portfolios; clients embed the returned triple in a later save.

use folio_core::models::MediaType;
use folio_storage::{Storage, StorageError};
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::AsyncRead;
use uuid::Uuid;

/// Content type assumed when the upload part declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Identity of a successfully stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub id: String,
    pub filename: String,
    pub media_type: MediaType,
}

/// `video` when the declared content type mentions "video", otherwise `image`.
pub fn classify_media_type(content_type: &str) -> MediaType {
    MediaType::from_content_type(content_type)
}

/// Extension of the final path component, leading dot included.
///
/// Empty when there is no dot, and for dot-files such as `.bashrc`. Case is kept.
pub fn file_extension(filename: &str) -> &str {
    let name = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => &name[dot..],
        _ => "",
    }
}

#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn Storage>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Store one upload stream and return its identity.
    ///
    /// On a failed write the partial file is removed (best effort) and no identity is
    /// returned.
    #[tracing::instrument(skip(self, reader), fields(operation = "ingest_upload"))]
    pub async fn ingest<'r>(
        &self,
        original_filename: Option<&str>,
        content_type: Option<&str>,
        reader: Pin<Box<dyn AsyncRead + Send + 'r>>,
    ) -> Result<UploadedMedia, StorageError> {
        let id = Uuid::new_v4().to_string();
        let extension = original_filename.map(file_extension).unwrap_or("");
        let filename = format!("{}{}", id, extension);
        let media_type = classify_media_type(content_type.unwrap_or(DEFAULT_CONTENT_TYPE));

        match self.storage.upload_stream(&filename, reader).await {
            Ok(size_bytes) => {
                tracing::info!(
                    media_id = %id,
                    filename = %filename,
                    media_type = %media_type,
                    size_bytes = size_bytes,
                    "Upload stored"
                );
                Ok(UploadedMedia {
                    id,
                    filename,
                    media_type,
                })
            }
            Err(err) => {
                if !matches!(err, StorageError::InvalidKey(_)) {
                    if let Err(cleanup_err) = self.storage.delete(&filename).await {
                        tracing::warn!(
                            filename = %filename,
                            error = %cleanup_err,
                            "Failed to remove partial upload"
                        );
                    }
                }
                Err(err)
            }
        }
    }
}
