// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod account;
pub mod config;
pub mod dao;

#[cfg(test)]
pub(crate) mod test_utils;

pub use account::Account;
pub use config::{Config, DatabaseConfig};
pub use crate::core::db::ConnectionProvider;
pub use crate::core::{AccountDbError, Result};
pub use dao::{AccountDao, InMemoryAccountDao, SqliteAccountDao};
