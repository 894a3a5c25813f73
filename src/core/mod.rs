//! Core business logic module
//!
//! This module contains the account model and the ledger built on it:
//! - `traits` - The polymorphic `Account` surface and the `InterestBearing` capability
//! - `account` - The base account and its savings and overdraft variants
//! - `numbering` - Account number assignment
//! - `ledger` - Accounts held by number, with operations applied to them

pub mod account;
pub mod ledger;
pub mod numbering;
pub mod traits;

pub use account::{
    BankAccount, OverdraftAccount, SavingsAccount, DEFAULT_INTEREST_RATE, DEFAULT_OVERDRAFT_LIMIT,
};
pub use ledger::{Ledger, LedgerConfig};
pub use numbering::{total_accounts, AccountNumberGenerator};
pub use traits::{Account, InterestBearing};
