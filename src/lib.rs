//! Account Ledger Library
//! # Overview
//!
//! An in-memory account ledger: a base account with private balance state and
//! two variants that customize its behavior.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (account numbers and kinds, operations, errors)
//! - [`core`] - Business logic components:
//!   - [`core::account`] - The base account and its variants
//!   - [`core::numbering`] - Account number assignment
//!   - [`core::ledger`] - Accounts held by number, with operations applied to them
//! - [`io`] - Operation script parsing and account listing output
//! - [`runner`] - Script processing from input file to account listing
//! - [`demo`] - The built-in demonstration
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Account Variants
//!
//! - **Standard**: Deposits must be positive; withdrawals must be positive and
//!   covered by the balance
//! - **Savings**: Standard rules, plus interest credited at the account's rate
//! - **Overdraft**: Withdrawals may take the balance below zero, down to the
//!   account's overdraft limit
//!
//! Rejected operations are denials: they return an error and leave the
//! balance unchanged.

pub mod cli;
pub mod core;
pub mod demo;
pub mod io;
pub mod logging;
pub mod runner;
pub mod types;

pub use crate::core::{
    total_accounts, Account, AccountNumberGenerator, BankAccount, InterestBearing, Ledger,
    LedgerConfig, OverdraftAccount, SavingsAccount,
};
pub use crate::io::write_accounts_csv;
pub use runner::{RunSummary, ScriptRunner};
pub use types::{AccountKind, AccountNumber, AccountSnapshot, LedgerError, Operation};
