//! Database repositories for data access layer
//
// Portfolio storage backends (volatile map, PostgreSQL)
pub mod portfolio;

pub use portfolio::{MemoryPortfolioStore, PgPortfolioStore, PortfolioStore, StoreError, StoreResult};
