//! Folio Storage Library
//!
//! This crate provides the content directory abstraction used for uploaded media files.
//! It includes the Storage trait and a local filesystem implementation.
//!
//! # Storage key format
//!
//! The content directory is flat: a storage key is the stored filename itself
//! (`{identifier}{extension}`). Keys must not be empty and must not contain `..` or a
//! path separator.

pub mod factory;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
