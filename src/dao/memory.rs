//! A map-backed `AccountDao` for tests and demos that need no database.
use super::{check_insertable, check_updatable, AccountDao};
use crate::account::Account;
use crate::core::Result;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct MemoryState {
    rows: BTreeMap<i64, Account>,
    next_id: i64,
}

/// Keeps accounts in a `BTreeMap` keyed by id.
///
/// Ids start at 1 and are never reused, like an auto-increment key.
#[derive(Debug)]
pub struct InMemoryAccountDao {
    state: Mutex<MemoryState>,
}

impl Default for InMemoryAccountDao {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAccountDao {
    pub fn new() -> Self {
        InMemoryAccountDao {
            state: Mutex::new(MemoryState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AccountDao for InMemoryAccountDao {
    fn add(&self, account: &mut Account) -> Result<i64> {
        check_insertable(account)?;
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        account.id = id;
        state.rows.insert(id, account.clone());
        Ok(id)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Account>> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    fn update(&self, account: &Account) -> Result<bool> {
        check_updatable(account)?;
        let mut state = self.lock();
        match state.rows.get_mut(&account.id) {
            Some(row) => {
                *row = account.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.lock().rows.remove(&id).is_some())
    }
}
