//! Integer account identifier.
//!
//! Account IDs are assigned by the storage layer when an account is
//! persisted. A freshly constructed [`Account`](crate::Account) carries the
//! zero ID until the store writes the real one back.
//!
//! IDs arriving from a request path are parsed with [`FromStr`], which
//! only accepts non-negative decimal integers.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for an account, assigned by the store.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// The unassigned ID carried by accounts that have not been stored yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Whether the store has assigned this ID.
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// Error returned when a path segment is not a valid [`AccountId`].
///
/// Carries the raw input so callers can echo it back to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid id {0}")]
pub struct ParseAccountIdError(pub String);

impl FromStr for AccountId {
    type Err = ParseAccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Reject signs outright; i64::from_str would accept "+5" and "-5".
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseAccountIdError(s.to_owned()));
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_overflow| ParseAccountIdError(s.to_owned()))
    }
}
