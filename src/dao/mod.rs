//! Data access for the `account` table.
//!
//! [`AccountDao`] is the capability the rest of a program codes against.
//! [`SqliteAccountDao`] is the real implementation; [`InMemoryAccountDao`]
//! keeps rows in a map and is meant for tests.

use crate::account::Account;
use crate::core::{AccountDbError, Result};

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryAccountDao;
pub use sqlite::SqliteAccountDao;

/// CRUD operations over account records.
pub trait AccountDao {
    /// Inserts `account` and writes the generated key back into it.
    ///
    /// The record must not carry an id yet.
    fn add(&self, account: &mut Account) -> Result<i64>;

    /// Fetches one account. `Ok(None)` means no row has that id.
    fn get_by_id(&self, id: i64) -> Result<Option<Account>>;

    /// Every stored account, in whatever order the store yields them.
    fn get_all(&self) -> Result<Vec<Account>>;

    /// Overwrites all mutable columns of the row at `account.id`.
    ///
    /// Returns `false` when no such row exists; that is not an error.
    fn update(&self, account: &Account) -> Result<bool>;

    /// Removes the row with `id`. Returns `false` if there was none.
    fn delete(&self, id: i64) -> Result<bool>;

    /// Like [`AccountDao::get_by_id`] but absence is `AccountDbError::NotFound`.
    fn require_by_id(&self, id: i64) -> Result<Account> {
        self.get_by_id(id)?.ok_or(AccountDbError::NotFound { id })
    }
}

pub(crate) fn check_insertable(account: &Account) -> Result<()> {
    if account.is_persisted() {
        return Err(AccountDbError::InvalidRecord(format!(
            "account already has id {}",
            account.id
        )));
    }
    Ok(())
}

pub(crate) fn check_updatable(account: &Account) -> Result<()> {
    if !account.is_persisted() {
        return Err(AccountDbError::InvalidRecord(
            "account has no id; insert it first".to_string(),
        ));
    }
    Ok(())
}
