//! `AccountDao` backed by SQLite through a shared [`ConnectionProvider`].
use super::{check_insertable, check_updatable, AccountDao};
use crate::account::Account;
use crate::core::db::{ConnectionProvider, ACCOUNT_COLUMNS};
use crate::core::Result;
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;
use tracing::{debug, error};

const INSERT_SQL: &str = "INSERT INTO account
     (first_name, last_name, username, email, password, role_id)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

const UPDATE_SQL: &str = "UPDATE account
     SET first_name = ?1, last_name = ?2, username = ?3, email = ?4, password = ?5, role_id = ?6
     WHERE id = ?7";

const DELETE_SQL: &str = "DELETE FROM account WHERE id = ?1";

/// Data access object for the `account` table.
///
/// Several DAOs may share one provider, and with it one connection.
#[derive(Debug, Clone)]
pub struct SqliteAccountDao {
    provider: Arc<ConnectionProvider>,
}

impl SqliteAccountDao {
    pub fn new(provider: Arc<ConnectionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<ConnectionProvider> {
        &self.provider
    }
}

impl AccountDao for SqliteAccountDao {
    fn add(&self, account: &mut Account) -> Result<i64> {
        check_insertable(account)?;

        let result = self.provider.with_connection(|conn| {
            conn.execute(
                INSERT_SQL,
                params![
                    account.first_name,
                    account.last_name,
                    account.username,
                    account.email,
                    account.password,
                    account.role_id,
                ],
            )?;
            // Same connection, same lock: the rowid belongs to this insert
            Ok(conn.last_insert_rowid())
        });

        match result {
            Ok(id) => {
                account.id = id;
                debug!("Added account with id {}", id);
                Ok(id)
            }
            Err(e) => {
                error!("Failed to add account '{}': {}", account.username, e);
                Err(e)
            }
        }
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        let sql = format!("SELECT {} FROM account WHERE id = ?1", ACCOUNT_COLUMNS);
        self.provider
            .with_connection(|conn| Ok(conn.query_row(&sql, [id], Account::from_row).optional()?))
            .map_err(|e| {
                error!("Failed to fetch account {}: {}", id, e);
                e
            })
    }

    fn get_all(&self) -> Result<Vec<Account>> {
        let sql = format!("SELECT {} FROM account", ACCOUNT_COLUMNS);
        self.provider
            .with_connection(|conn| {
                let mut stmt = conn.prepare(&sql)?;
                let accounts = stmt
                    .query_map([], Account::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(accounts)
            })
            .map_err(|e| {
                error!("Failed to list accounts: {}", e);
                e
            })
    }

    fn update(&self, account: &Account) -> Result<bool> {
        check_updatable(account)?;

        let changed = self
            .provider
            .with_connection(|conn| {
                Ok(conn.execute(
                    UPDATE_SQL,
                    params![
                        account.first_name,
                        account.last_name,
                        account.username,
                        account.email,
                        account.password,
                        account.role_id,
                        account.id,
                    ],
                )?)
            })
            .map_err(|e| {
                error!("Failed to update account {}: {}", account.id, e);
                e
            })?;

        debug!("Updated account {} ({} row(s))", account.id, changed);
        Ok(changed > 0)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .provider
            .with_connection(|conn| Ok(conn.execute(DELETE_SQL, [id])?))
            .map_err(|e| {
                error!("Failed to delete account {}: {}", id, e);
                e
            })?;

        debug!("Deleted account {} ({} row(s))", id, removed);
        Ok(removed > 0)
    }
}
