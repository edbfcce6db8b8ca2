mod memory;
mod postgres;
mod traits;

pub use memory::MemoryPortfolioStore;
pub use postgres::PgPortfolioStore;
pub use traits::{PortfolioStore, StoreError, StoreResult};
