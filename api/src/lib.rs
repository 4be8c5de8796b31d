//! Read-only Ethereum JSON-RPC query facade over an append-only ledger
//! stored in SQLite.

pub mod config;
pub mod database;
pub mod error;
pub mod eth;

pub use config::Config;
pub use database::Database;
pub use error::{EthApiError, Result};
pub use eth::EthApi;
