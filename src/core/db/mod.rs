/// Database Module
///
/// This module provides the database plumbing underneath the account DAO,
/// organized into focused submodules.
///
/// ## Architecture
///
/// - **Connection Management** (`connection.rs`): the shared, lazily opened connection handle
/// - **Schema** (`schema.rs`): the `account` table definition and bootstrap
///
/// ## Error Handling
///
/// Open failures surface as `AccountDbError::Connection`; statement failures as
/// `AccountDbError::Store`.
pub mod connection;
pub mod schema;

pub use connection::*;
pub use schema::*;
