//! The in-memory form of one `account` row.
use serde::Serialize;
use std::fmt;

/// One row of the `account` table.
///
/// `id` is 0 until the store assigns a key on insert; after that it is
/// never changed by this crate. The password is kept as given (plaintext)
/// but is left out of `Debug`, `Display` and serialized output. Serialized
/// output is one-way for that reason: there is no `Deserialize`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role_id: i64,
}

impl Account {
    /// Creates a record that has not been inserted yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role_id: i64,
    ) -> Self {
        Self {
            id: 0, // Will be set by database
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role_id,
        }
    }

    /// Creates a record materialized from a stored row.
    pub fn with_id(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role_id: i64,
    ) -> Self {
        Self {
            id,
            ..Self::new(first_name, last_name, username, email, password, role_id)
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Account {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            username: row.get(3)?,
            email: row.get(4)?,
            password: row.get(5)?,
            role_id: row.get(6)?,
        })
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role_id", &self.role_id)
            .finish()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} <{}> username={} role={}",
            self.id, self.first_name, self.last_name, self.email, self.username, self.role_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::olena;

    #[test]
    fn test_new_is_not_persisted() {
        let account = olena();
        assert_eq!(account.id, 0);
        assert!(!account.is_persisted());
        assert!(Account::with_id(7, "a", "b", "c", "d", "e", 1).is_persisted());
    }

    #[test]
    fn test_display_omits_password() {
        let account = Account { id: 1, ..olena() };
        insta::assert_snapshot!(
            account.to_string(),
            @"#1 Olena Shevchenko <olena@example.com> username=olena_shev role=2"
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", olena());
        assert!(!rendered.contains("pass123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_serialize_skips_password() {
        let json = serde_json::to_value(olena()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "olena_shev");
        assert_eq!(json["id"], 0);
        assert_eq!(json["role_id"], 2);
    }
}
