/// Connection Management Module
///
/// This module provides the shared connection handle used by every
/// data-access object. The handle is opened lazily and re-opened after an
/// explicit close.

use crate::config::DatabaseConfig;
use crate::core::db::schema::ensure_schema;
use crate::core::{AccountDbError, Result};
use rusqlite::{Connection, OpenFlags};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, error, info};

/// Supplies one live connection to all of its users.
///
/// The provider has two states: no handle (never opened, or closed) and
/// open. The check-and-open step runs under a mutex, and so does every
/// statement, so a provider can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct ConnectionProvider {
    config: DatabaseConfig,
    /// Active database connection (None if not opened or closed)
    state: Mutex<Option<Connection>>,
}

impl ConnectionProvider {
    /// Creates a provider without opening anything.
    pub fn new(config: DatabaseConfig) -> Self {
        ConnectionProvider {
            config,
            state: Mutex::new(None),
        }
    }

    /// Creates a provider and opens its connection immediately.
    ///
    /// # Returns
    ///
    /// `AccountDbError::Connection` if the database cannot be opened.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let provider = ConnectionProvider::new(config);
        provider.with_connection(|_| Ok(()))?;
        Ok(provider)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        ConnectionProvider::open(DatabaseConfig::in_memory())
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Runs `f` with the live connection, opening one first if needed.
    ///
    /// The connection stays locked for the duration of `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accountdb::core::db::ConnectionProvider;
    ///
    /// let provider = ConnectionProvider::in_memory().unwrap();
    /// let one: i64 = provider
    ///     .with_connection(|conn| Ok(conn.query_row("SELECT 1", [], |row| row.get(0))?))
    ///     .unwrap();
    /// assert_eq!(one, 1);
    /// ```
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut guard = self.lock();
        let conn = match guard.take() {
            Some(conn) => conn,
            None => self.connect()?,
        };
        f(&*guard.insert(conn))
    }

    /// Checks if there's an active database connection
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Closes the current connection, if any.
    ///
    /// The next call to [`ConnectionProvider::with_connection`] opens a
    /// fresh one. For `:memory:` databases that means an empty database.
    pub fn close(&self) -> Result<()> {
        let mut guard = self.lock();
        if let Some(conn) = guard.take() {
            if let Err((conn, e)) = conn.close() {
                error!("Failed to close database '{}': {}", self.config.path, e);
                *guard = Some(conn);
                return Err(AccountDbError::Store(e));
            }
            info!("Closed database '{}'", self.config.path);
        }
        Ok(())
    }

    /// Locks the slot, recovering it if a previous holder panicked.
    ///
    /// The slot only ever holds `None` or a whole connection, so a panic
    /// inside a `with_connection` callback cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<Connection>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn connect(&self) -> Result<Connection> {
        let path = &self.config.path;
        let wrap = |source: rusqlite::Error| AccountDbError::Connection {
            path: path.clone(),
            source,
        };

        let conn = if self.config.is_in_memory() {
            Connection::open_in_memory().map_err(wrap)?
        } else {
            let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX;
            if self.config.create_if_missing {
                flags |= OpenFlags::SQLITE_OPEN_CREATE;
            }
            Connection::open_with_flags(path, flags).map_err(wrap)?
        };

        conn.busy_timeout(Duration::from_millis(self.config.busy_timeout_ms))
            .map_err(wrap)?;
        conn.pragma_update(None, "foreign_keys", self.config.foreign_keys)
            .map_err(wrap)?;
        // journal_mode reports the resulting mode as a row
        let mode: String = conn
            .query_row(
                &format!("PRAGMA journal_mode = {}", self.config.journal_mode.as_str()),
                [],
                |row| row.get(0),
            )
            .map_err(wrap)?;
        debug!("Journal mode for '{}' is {}", path, mode);

        if self.config.create_schema {
            ensure_schema(&conn).map_err(wrap)?;
        }

        info!("Opened database '{}'", path);
        Ok(conn)
    }
}
