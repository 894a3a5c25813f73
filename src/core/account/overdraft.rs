//! Overdraft-permitting account

use super::BankAccount;
use crate::core::numbering::AccountNumberGenerator;
use crate::core::traits::Account;
use crate::types::{AccountKind, AccountNumber, LedgerError};
use rust_decimal::Decimal;

/// Limit used when none is given: -1000
pub const DEFAULT_OVERDRAFT_LIMIT: Decimal = Decimal::from_parts(1000, 0, 0, true, 0);

/// Account whose balance may go negative, down to its overdraft limit
///
/// Only `withdraw` differs from [`BankAccount`]. The limit is taken as given;
/// with a limit of zero or below the balance never drops under it.
///
/// # Examples
///
/// ```
/// use account_ledger::{Account, OverdraftAccount};
/// use rust_decimal::Decimal;
///
/// let mut account = OverdraftAccount::new("Danny", Decimal::new(50, 0), Decimal::new(-1000, 0));
///
/// account.withdraw(Decimal::new(900, 0)).unwrap();
/// assert_eq!(account.balance(), Decimal::new(-850, 0));
///
/// assert!(account.withdraw(Decimal::new(5000, 0)).is_err());
/// assert_eq!(account.balance(), Decimal::new(-850, 0));
/// ```
#[derive(Debug)]
pub struct OverdraftAccount {
    base: BankAccount,
    overdraft_limit: Decimal,
}

impl OverdraftAccount {
    /// Open an overdraft account numbered from the process-wide generator
    pub fn new(
        holder_name: impl Into<String>,
        initial_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        Self::with_generator(
            AccountNumberGenerator::global(),
            holder_name,
            initial_balance,
            overdraft_limit,
        )
    }

    /// Open an overdraft account numbered from `numbers`
    pub fn with_generator(
        numbers: &AccountNumberGenerator,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        OverdraftAccount {
            base: BankAccount::with_generator(numbers, holder_name, initial_balance),
            overdraft_limit,
        }
    }

    /// Lowest balance a withdrawal may leave
    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }
}

impl Account for OverdraftAccount {
    fn holder_name(&self) -> &str {
        self.base.holder_name()
    }

    fn account_number(&self) -> AccountNumber {
        self.base.account_number()
    }

    fn balance(&self) -> Decimal {
        self.base.balance()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Overdraft
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.base.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let account = self.account_number();

        if amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(account, amount));
        }

        let candidate = self
            .balance()
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw", account))?;

        if candidate < self.overdraft_limit {
            return Err(LedgerError::overdraft_limit_exceeded(
                account,
                self.overdraft_limit,
                candidate,
            ));
        }

        // Negative balances are the point of this variant, so skip the base check
        self.base.set_balance(candidate);

        Ok(())
    }
}
