//! Account number assignment
//!
//! Numbers come from an [`AccountNumberGenerator`]. One generator is
//! process-wide and backs the plain constructors (`BankAccount::new` and the
//! variants); a [`Ledger`](crate::core::Ledger) owns its own so that its
//! numbering does not depend on what else the process has created.
//!
//! The process-wide generator is only reachable through the account
//! constructors, so its count always equals the accounts they created:
//!
//! ```compile_fail
//! use account_ledger::AccountNumberGenerator;
//!
//! AccountNumberGenerator::global().next_number();
//! ```

use crate::types::AccountNumber;
use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL: AccountNumberGenerator = AccountNumberGenerator::new();

/// Monotonic source of account numbers
///
/// Increment-then-assign: the first number handed out is 1. Numbers are never
/// reused and the count is never decremented. The increment is atomic, so
/// numbers stay unique and ordered when accounts are created from several
/// threads.
#[derive(Debug, Default)]
pub struct AccountNumberGenerator {
    issued: AtomicU64,
}

impl AccountNumberGenerator {
    /// Create a generator that has issued no numbers yet
    pub const fn new() -> Self {
        AccountNumberGenerator {
            issued: AtomicU64::new(0),
        }
    }

    /// The process-wide generator
    pub(crate) fn global() -> &'static AccountNumberGenerator {
        &GLOBAL
    }

    /// Issue the next account number
    pub fn next_number(&self) -> AccountNumber {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// How many numbers this generator has issued
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

/// Number of accounts created through the process-wide generator
pub fn total_accounts() -> u64 {
    GLOBAL.issued()
}
