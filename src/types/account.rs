//! Account-related types for the ledger
//!
//! The account behavior itself lives in [`crate::core::account`]; this module
//! only holds the plain data shared by the core, I/O and CLI layers.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Account identifier
///
/// Assigned from an [`AccountNumberGenerator`](crate::core::AccountNumberGenerator),
/// starting at 1.
pub type AccountNumber = u64;

/// The closed set of account variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// Base account: no negative balance, no interest
    Standard,

    /// Interest-bearing account
    ///
    /// Same rules as `Standard`, plus interest can be credited at the
    /// account's rate.
    Savings,

    /// Overdraft-permitting account
    ///
    /// Withdrawals may take the balance below zero, down to the account's
    /// overdraft limit.
    Overdraft,
}

impl AccountKind {
    /// Lowercase name, as used in scripts and the account listing
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::Savings => "savings",
            AccountKind::Overdraft => "overdraft",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountKind {
    type Err = String;

    /// Parse a kind name, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(AccountKind::Standard),
            "savings" => Ok(AccountKind::Savings),
            "overdraft" => Ok(AccountKind::Overdraft),
            other => Err(other.to_string()),
        }
    }
}

/// Point-in-time copy of an account's observable state
///
/// Used for output. Holding a snapshot gives no access to the account it
/// was taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    /// The account number
    pub number: AccountNumber,

    /// Which variant the account is
    pub kind: AccountKind,

    /// Name of the account holder
    pub holder: String,

    /// Balance at the time of the snapshot
    pub balance: Decimal,
}
