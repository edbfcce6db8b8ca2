//! Business logic services behind the HTTP handlers.

pub mod portfolio;
pub mod upload;
