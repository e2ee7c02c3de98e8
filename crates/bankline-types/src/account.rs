//! The account entity and the request body that creates one.
//!
//! Wire field names follow the public JSON contract (`ID`, `FirstName`,
//! `LastName`, `Number`, `Balance`, `CreatedAt`) rather than Rust naming.

use chrono::{DateTime, SubsecRound, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ids::AccountId;

/// Account numbers are drawn uniformly from this range.
const ACCOUNT_NUMBER_RANGE: core::ops::Range<i64> = 1..1_000_000;

/// Timestamps keep microsecond precision so they survive a `TIMESTAMPTZ`
/// round trip unchanged.
const CREATED_AT_SUBSEC_DIGITS: u16 = 6;

/// A bank-account-like resource managed by the API.
///
/// `id` is assigned by the store on creation. `number` and `created_at`
/// are fixed at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    /// Store-assigned identifier ([`AccountId::UNASSIGNED`] until stored).
    #[serde(rename = "ID")]
    pub id: AccountId,
    /// Holder's first name.
    pub first_name: String,
    /// Holder's last name.
    pub last_name: String,
    /// Randomly generated account number.
    pub number: i64,
    /// Current balance in minor units.
    pub balance: i64,
    /// When the account was constructed.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Construct a new, unstored account.
    ///
    /// Draws a random account number, starts the balance at zero, and
    /// stamps the current time truncated to microseconds. The ID stays
    /// unassigned until a store persists the account.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let number = rand::rng().random_range(ACCOUNT_NUMBER_RANGE);
        Self {
            id: AccountId::UNASSIGNED,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number,
            balance: 0,
            created_at: Utc::now().trunc_subsecs(CREATED_AT_SUBSEC_DIGITS),
        }
    }
}

/// Request body for `POST /account`.
///
/// Both fields are required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccountRequest {
    /// Holder's first name.
    pub first_name: String,
    /// Holder's last name.
    pub last_name: String,
}

impl From<CreateAccountRequest> for Account {
    fn from(req: CreateAccountRequest) -> Self {
        Self::new(req.first_name, req.last_name)
    }
}
