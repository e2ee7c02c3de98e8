//! The storage contract the API layer depends on.
//!
//! [`AccountStore`] is the only persistence surface the request handlers
//! see. Implementations own their own synchronization: the API performs
//! no locking, caching, or retries around these calls, and concurrent
//! callers may interleave arbitrarily.

use std::future::Future;

use bankline_types::{Account, AccountId};

use crate::error::DbError;

/// Persistence operations over [`Account`] records.
///
/// Methods return `Send` futures so handlers generic over the store can
/// run on a multi-threaded runtime.
pub trait AccountStore: Send + Sync + 'static {
    /// Persist a new account and write the assigned ID back into it.
    ///
    /// # Errors
    ///
    /// Fails if the underlying store rejects the write.
    fn create_account(
        &self,
        account: &mut Account,
    ) -> impl Future<Output = Result<(), DbError>> + Send;

    /// Remove the account with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::AccountNotFound`] if no such account exists, or
    /// a backend error if the removal fails.
    fn delete_account(&self, id: AccountId) -> impl Future<Output = Result<(), DbError>> + Send;

    /// Return every stored account ordered by ID.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read.
    fn get_accounts(&self) -> impl Future<Output = Result<Vec<Account>, DbError>> + Send;

    /// Return the account with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::AccountNotFound`] if no such account exists.
    fn get_account_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Account, DbError>> + Send;
}
