//! In-process [`AccountStore`] backed by a [`BTreeMap`].
//!
//! This is the default store when no database URL is configured, and the
//! one the API tests run against. IDs start at 1 and are never reused,
//! even after the account holding one is deleted.

use std::collections::BTreeMap;

use bankline_types::{Account, AccountId};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::AccountStore;

/// First ID handed out by a fresh store.
const FIRST_ID: i64 = 1;

#[derive(Debug)]
struct Inner {
    accounts: BTreeMap<AccountId, Account>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }
}

/// Account store held entirely in memory.
///
/// ID assignment and insertion happen under one write lock, so
/// concurrent creates always receive distinct IDs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    /// Whether the store holds no accounts.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.accounts.is_empty()
    }
}

impl AccountStore for MemoryStore {
    async fn create_account(&self, account: &mut Account) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;

        let id = AccountId(inner.next_id);
        inner.next_id = inner.next_id.checked_add(1).ok_or(DbError::IdExhausted)?;

        account.id = id;
        inner.accounts.insert(id, account.clone());

        tracing::debug!(%id, "Stored account in memory");
        Ok(())
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;
        inner
            .accounts
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::AccountNotFound(id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.values().cloned().collect())
    }

    async fn get_account_by_id(&self, id: AccountId) -> Result<Account, DbError> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .get(&id)
            .cloned()
            .ok_or(DbError::AccountNotFound(id))
    }
}
