/// Core Module for AccountDb
///
/// Shared infrastructure for the data-access layer: connection management,
/// schema bootstrap and error handling.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{AccountDbError, Result};
