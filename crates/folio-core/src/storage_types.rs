use std::fmt::{Display, Formatter, Result as FmtResult};

/// Portfolio storage backend types
///
/// Selected at startup: `Postgres` when a database URL is configured, `Memory` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioBackend {
    /// Process-local map, cleared on restart
    Memory,
    /// Durable PostgreSQL table keyed by user id
    Postgres,
}

impl Display for PortfolioBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PortfolioBackend::Memory => write!(f, "memory"),
            PortfolioBackend::Postgres => write!(f, "postgres"),
        }
    }
}
