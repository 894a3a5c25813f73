//! Interest-bearing account

use super::BankAccount;
use crate::core::numbering::AccountNumberGenerator;
use crate::core::traits::{Account, InterestBearing};
use crate::types::{AccountKind, AccountNumber, LedgerError};
use rust_decimal::Decimal;

/// Rate used when none is given: 5%
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Account that earns interest
///
/// Behaves exactly like [`BankAccount`]; interest is credited on demand with
/// [`apply_interest`](InterestBearing::apply_interest).
///
/// # Examples
///
/// ```
/// use account_ledger::{Account, InterestBearing, SavingsAccount};
/// use rust_decimal::Decimal;
///
/// let mut account = SavingsAccount::new("Mercedes", Decimal::new(200, 0), Decimal::new(5, 2));
/// account.apply_interest().unwrap();
///
/// assert_eq!(account.balance(), Decimal::new(210, 0));
/// ```
#[derive(Debug)]
pub struct SavingsAccount {
    base: BankAccount,
    /// Interest rate as a fraction (0.05 = 5%)
    pub interest_rate: Decimal,
}

impl SavingsAccount {
    /// Open a savings account numbered from the process-wide generator
    pub fn new(
        holder_name: impl Into<String>,
        initial_balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self::with_generator(
            AccountNumberGenerator::global(),
            holder_name,
            initial_balance,
            interest_rate,
        )
    }

    /// Open a savings account numbered from `numbers`
    pub fn with_generator(
        numbers: &AccountNumberGenerator,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        SavingsAccount {
            base: BankAccount::with_generator(numbers, holder_name, initial_balance),
            interest_rate,
        }
    }
}

impl Account for SavingsAccount {
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
        AccountKind::Savings
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.base.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.base.withdraw(amount)
    }

    fn as_interest_bearing_mut(&mut self) -> Option<&mut dyn InterestBearing> {
        Some(self)
    }
}

impl InterestBearing for SavingsAccount {
    fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    fn apply_interest(&mut self) -> Result<Decimal, LedgerError> {
        let interest = self
            .balance()
            .checked_mul(self.interest_rate)
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest", self.account_number()))?;

        // Zero interest goes through deposit too, which denies it
        self.deposit(interest)?;

        Ok(interest)
    }
}
