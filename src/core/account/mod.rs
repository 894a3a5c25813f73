//! Account variants
//!
//! [`BankAccount`] is the base account. [`SavingsAccount`] and
//! [`OverdraftAccount`] wrap one and change or extend its behavior.
//!
//! The balance and number are private. They can only be read through the
//! accessors, and the balance only changes through `deposit`, `withdraw`, or
//! `set_balance`, which is visible to this module and its variant submodules
//! only:
//!
//! ```compile_fail
//! use account_ledger::BankAccount;
//! use rust_decimal::Decimal;
//!
//! let mut account = BankAccount::new("Paulette", Decimal::ONE_HUNDRED);
//! account.balance = Decimal::ONE_THOUSAND;
//! ```
//!
//! ```compile_fail
//! use account_ledger::BankAccount;
//! use rust_decimal::Decimal;
//!
//! let account = BankAccount::new("Paulette", Decimal::ONE_HUNDRED);
//! let number = account.number;
//! ```
//!
//! ```compile_fail
//! use account_ledger::BankAccount;
//! use rust_decimal::Decimal;
//!
//! let mut account = BankAccount::new("Paulette", Decimal::ONE_HUNDRED);
//! account.set_balance(Decimal::ONE_THOUSAND);
//! ```

mod overdraft;
mod savings;

pub use overdraft::{OverdraftAccount, DEFAULT_OVERDRAFT_LIMIT};
pub use savings::{SavingsAccount, DEFAULT_INTEREST_RATE};

use crate::core::numbering::AccountNumberGenerator;
use crate::core::traits::Account;
use crate::types::{AccountKind, AccountNumber, LedgerError};
use rust_decimal::Decimal;

/// Base account
///
/// Its balance never goes negative: withdrawals beyond the balance are
/// denied.
///
/// # Examples
///
/// ```
/// use account_ledger::{Account, BankAccount};
/// use rust_decimal::Decimal;
///
/// let mut account = BankAccount::new("Paulette", Decimal::new(100, 0));
///
/// assert!(account.deposit(Decimal::new(-10, 0)).is_err());
/// assert!(account.withdraw(Decimal::new(9999, 0)).is_err());
/// account.withdraw(Decimal::new(20, 0)).unwrap();
///
/// assert_eq!(account.balance(), Decimal::new(80, 0));
/// ```
#[derive(Debug)]
pub struct BankAccount {
    /// Name of the account holder
    pub holder_name: String,
    number: AccountNumber,
    balance: Decimal,
}

impl BankAccount {
    /// Open an account numbered from the process-wide generator
    ///
    /// A negative `initial_balance` is clamped to zero.
    pub fn new(holder_name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::with_generator(AccountNumberGenerator::global(), holder_name, initial_balance)
    }

    /// Open an account numbered from `numbers`
    pub fn with_generator(
        numbers: &AccountNumberGenerator,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Self {
        let balance = if initial_balance < Decimal::ZERO {
            Decimal::ZERO
        } else {
            initial_balance
        };

        BankAccount {
            holder_name: holder_name.into(),
            number: numbers.next_number(),
            balance,
        }
    }

    /// Overwrite the balance without any validation
    ///
    /// Callers keep their own invariants.
    pub(in crate::core::account) fn set_balance(&mut self, new_balance: Decimal) {
        self.balance = new_balance;
    }
}

impl Account for BankAccount {
    fn holder_name(&self) -> &str {
        &self.holder_name
    }

    fn account_number(&self) -> AccountNumber {
        self.number
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Standard
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(self.number, amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.number))?;

        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(self.number, amount));
        }

        if self.balance < amount {
            return Err(LedgerError::insufficient_funds(
                self.number,
                self.balance,
                amount,
            ));
        }

        // Cannot underflow: amount is positive and at most the balance
        self.balance -= amount;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn account_with(balance: Decimal) -> BankAccount {
        BankAccount::with_generator(&AccountNumberGenerator::new(), "Paulette", balance)
    }

    #[rstest]
    #[case::positive(Decimal::new(100, 0), Decimal::new(100, 0))]
    #[case::zero(Decimal::ZERO, Decimal::ZERO)]
    #[case::negative_clamped(Decimal::new(-50, 0), Decimal::ZERO)]
    fn test_initial_balance(#[case] initial: Decimal, #[case] expected: Decimal) {
        assert_eq!(account_with(initial).balance(), expected);
    }

    #[test]
    fn test_numbers_follow_creation_order() {
        let numbers = AccountNumberGenerator::new();
        let first = BankAccount::with_generator(&numbers, "A", Decimal::ZERO);
        let second = BankAccount::with_generator(&numbers, "B", Decimal::ZERO);
        let third = BankAccount::with_generator(&numbers, "C", Decimal::ZERO);

        assert_eq!(first.account_number(), 1);
        assert_eq!(second.account_number(), 2);
        assert_eq!(third.account_number(), 3);
        assert_eq!(numbers.issued(), 3);
    }

    #[test]
    fn test_global_constructor_uses_global_counter() {
        let first = BankAccount::new("A", Decimal::ZERO);
        let second = BankAccount::new("B", Decimal::ZERO);

        assert!(second.account_number() > first.account_number());
        assert!(crate::core::total_accounts() >= second.account_number());
    }

    #[rstest]
    #[case(Decimal::new(1, 2))]
    #[case(Decimal::new(50, 0))]
    #[case(Decimal::new(123456, 3))]
    fn test_deposit_adds_exact_amount(#[case] amount: Decimal) {
        let mut account = account_with(Decimal::new(100, 0));
        account.deposit(amount).unwrap();
        assert_eq!(account.balance(), Decimal::new(100, 0) + amount);
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-10, 0))]
    fn test_deposit_non_positive_denied(#[case] amount: Decimal) {
        let mut account = account_with(Decimal::new(100, 0));

        let result = account.deposit(amount);

        assert_eq!(
            result,
            Err(LedgerError::non_positive_amount(account.account_number(), amount))
        );
        assert_eq!(account.balance(), Decimal::new(100, 0));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance() {
        let mut account = account_with(Decimal::MAX);

        let result = account.deposit(Decimal::MAX);

        assert!(matches!(result, Err(LedgerError::ArithmeticOverflow { .. })));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[rstest]
    #[case::partial(Decimal::new(20, 0), Decimal::new(80, 0))]
    #[case::entire_balance(Decimal::new(100, 0), Decimal::ZERO)]
    #[case::fractional(Decimal::new(1, 4), Decimal::new(999999, 4))]
    fn test_withdraw_within_balance(#[case] amount: Decimal, #[case] expected: Decimal) {
        let mut account = account_with(Decimal::new(100, 0));
        account.withdraw(amount).unwrap();
        assert_eq!(account.balance(), expected);
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-5, 0))]
    fn test_withdraw_non_positive_denied(#[case] amount: Decimal) {
        let mut account = account_with(Decimal::new(100, 0));

        let error = account.withdraw(amount).unwrap_err();

        assert!(error.is_denial());
        assert!(matches!(error, LedgerError::NonPositiveAmount { .. }));
        assert_eq!(account.balance(), Decimal::new(100, 0));
    }

    #[test]
    fn test_withdraw_insufficient_funds_denied() {
        let mut account = account_with(Decimal::new(100, 0));

        let result = account.withdraw(Decimal::new(9999, 0));

        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(
                account.account_number(),
                Decimal::new(100, 0),
                Decimal::new(9999, 0)
            ))
        );
        assert_eq!(account.balance(), Decimal::new(100, 0));
    }

    #[test]
    fn test_set_balance_skips_validation() {
        let mut account = account_with(Decimal::new(100, 0));
        account.set_balance(Decimal::new(-5, 0));
        assert_eq!(account.balance(), Decimal::new(-5, 0));
    }

    #[test]
    fn test_base_scenario() {
        let mut account = account_with(Decimal::new(100, 0));

        assert!(account.deposit(Decimal::new(-10, 0)).unwrap_err().is_denial());
        assert_eq!(account.balance(), Decimal::new(100, 0));

        assert!(account.withdraw(Decimal::new(9999, 0)).unwrap_err().is_denial());
        assert_eq!(account.balance(), Decimal::new(100, 0));

        account.withdraw(Decimal::new(20, 0)).unwrap();
        assert_eq!(account.balance(), Decimal::new(80, 0));
    }

    #[test]
    fn test_snapshot() {
        let account = account_with(Decimal::new(100, 0));
        let snapshot = account.snapshot();

        assert_eq!(snapshot.number, account.account_number());
        assert_eq!(snapshot.kind, AccountKind::Standard);
        assert_eq!(snapshot.holder, "Paulette");
        assert_eq!(snapshot.balance, Decimal::new(100, 0));
    }
}
