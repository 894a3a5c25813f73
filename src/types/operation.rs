//! Ledger operations
//!
//! An [`Operation`] is one step of an operations script: opening an account
//! or one of the balance-changing operations on an existing account.

use super::account::{AccountKind, AccountNumber};
use rust_decimal::Decimal;

/// A single ledger operation
///
/// Produced by [`crate::io::csv_format::convert_csv_record`] and applied by
/// [`crate::core::Ledger::process`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Open a new account
    Open {
        /// Which variant to open
        kind: AccountKind,

        /// Name of the account holder
        holder: String,

        /// Opening balance; negative values are clamped to zero
        initial_balance: Decimal,

        /// Interest rate for savings, overdraft limit for overdraft accounts
        ///
        /// `None` uses the ledger's configured default. Ignored for
        /// standard accounts.
        parameter: Option<Decimal>,
    },

    /// Credit funds to an account
    Deposit {
        account: AccountNumber,
        amount: Decimal,
    },

    /// Debit funds from an account
    Withdraw {
        account: AccountNumber,
        amount: Decimal,
    },

    /// Credit interest to a savings account at its own rate
    ApplyInterest { account: AccountNumber },
}

impl Operation {
    /// Short name used in log lines and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Open { .. } => "open",
            Operation::Deposit { .. } => "deposit",
            Operation::Withdraw { .. } => "withdraw",
            Operation::ApplyInterest { .. } => "interest",
        }
    }
}
