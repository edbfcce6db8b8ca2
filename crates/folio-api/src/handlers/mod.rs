pub mod portfolio;
pub mod upload;
