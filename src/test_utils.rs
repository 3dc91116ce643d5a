/// # Test Utilities Module
///
/// Shared fixtures for the crate's unit tests.

use crate::account::Account;
use crate::core::db::ConnectionProvider;
use crate::dao::SqliteAccountDao;
use std::sync::Arc;

/// The sample record used throughout the tests.
pub fn olena() -> Account {
    Account::new("Olena", "Shevchenko", "olena_shev", "olena@example.com", "pass123", 2)
}

/// An in-memory database with the account table and a DAO over it.
pub struct SqliteFixture {
    pub provider: Arc<ConnectionProvider>,
    pub dao: SqliteAccountDao,
}

impl SqliteFixture {
    pub fn new() -> Self {
        let provider = Arc::new(ConnectionProvider::in_memory().expect("in-memory database"));
        let dao = SqliteAccountDao::new(Arc::clone(&provider));
        SqliteFixture { provider, dao }
    }
}
