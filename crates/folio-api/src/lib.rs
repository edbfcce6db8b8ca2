//! Folio API Library
//!
//! HTTP handlers, middleware, and application setup for the portfolio media backend.

mod api_doc;
pub mod constants;
mod extractors;
mod handlers;
mod middleware;
pub mod services;
pub mod setup;
mod telemetry;

pub mod error;
pub mod state;

pub use api_doc::ApiDoc;
pub use error::{ErrorResponse, HttpAppError};
