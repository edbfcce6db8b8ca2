//! Folio DB Library
//!
//! Storage backends for portfolios: a process-local map and a PostgreSQL table, both
//! behind the [`PortfolioStore`] trait.

pub mod db;
pub mod factory;

pub use db::{MemoryPortfolioStore, PgPortfolioStore, PortfolioStore, StoreError, StoreResult};
pub use factory::{create_portfolio_store, run_migrations, setup_pool};
