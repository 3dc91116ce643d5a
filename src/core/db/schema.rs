/// Schema Module
///
/// Definition of the `account` table. The data-access code is coupled to
/// these exact column names.

use rusqlite::Connection;
use tracing::debug;

pub const ACCOUNT_TABLE: &str = "account";

const ACCOUNT_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS account (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    username TEXT NOT NULL,
    email TEXT NOT NULL,
    password TEXT NOT NULL,
    role_id INTEGER NOT NULL
)"#;

/// Column list shared by every select, in `Account` field order.
pub const ACCOUNT_COLUMNS: &str = "id, first_name, last_name, username, email, password, role_id";

/// Creates the `account` table if it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    debug!("Ensuring {} table exists", ACCOUNT_TABLE);
    conn.execute(ACCOUNT_TABLE_SQL, [])?;
    Ok(())
}

/// Returns true if the `account` table is present.
pub fn account_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [ACCOUNT_TABLE],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
