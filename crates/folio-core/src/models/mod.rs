//! Domain models and API payloads

pub mod media;
pub mod portfolio;

pub use media::{MediaItem, MediaRecord, MediaType};
pub use portfolio::{
    LoadPortfolioResponse, Portfolio, RemoveMediaRequest, RemoveMediaResponse, StatusResponse,
    UploadResponse,
};
