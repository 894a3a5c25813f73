//! Core traits for accounts
//!
//! [`Account`] is the polymorphic surface shared by every variant; the
//! ledger holds accounts as `Box<dyn Account>`. [`InterestBearing`] is the
//! extra capability of savings accounts.

use crate::types::{AccountKind, AccountNumber, AccountSnapshot, LedgerError};
use rust_decimal::Decimal;
use std::fmt::Debug;

/// Operations every account supports
///
/// Balance and number are only readable through the accessors. Denied
/// operations return a [`LedgerError`] for which
/// [`is_denial`](LedgerError::is_denial) is true and leave the balance as it
/// was.
pub trait Account: Debug {
    /// Name of the account holder
    fn holder_name(&self) -> &str;

    /// The number assigned at construction
    fn account_number(&self) -> AccountNumber;

    /// Current balance
    fn balance(&self) -> Decimal;

    /// Which variant this account is
    fn kind(&self) -> AccountKind;

    /// Credit `amount`; zero or negative amounts are denied
    fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError>;

    /// Debit `amount` under the variant's withdrawal rule
    fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError>;

    /// Access to the interest capability, for variants that have one
    fn as_interest_bearing_mut(&mut self) -> Option<&mut dyn InterestBearing> {
        None
    }

    /// Copy of the observable state
    fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            number: self.account_number(),
            kind: self.kind(),
            holder: self.holder_name().to_string(),
            balance: self.balance(),
        }
    }
}

/// Accounts that earn interest
pub trait InterestBearing: Account {
    /// Rate as a fraction (0.05 = 5%)
    fn interest_rate(&self) -> Decimal;

    /// Credit `balance * rate` through the validated deposit path
    ///
    /// Returns the interest credited. Zero interest is denied like any other
    /// non-positive deposit.
    fn apply_interest(&mut self) -> Result<Decimal, LedgerError>;
}
