//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identifiers, kinds and snapshots
//! - `operation`: Scripted ledger operations
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod operation;

pub use account::{AccountKind, AccountNumber, AccountSnapshot};
pub use error::LedgerError;
pub use operation::Operation;
