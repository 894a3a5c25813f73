//! Ledger of accounts
//!
//! This module provides the `Ledger` that owns a set of accounts and applies
//! operations to them by account number.
//!
//! The ledger enforces:
//! - Account lookup before every balance operation
//! - Interest only on variants that support it
//! - Non-positive overdraft limits on opening
//!
//! Everything else (amount validation, funds checks) is the accounts' own
//! business.

use crate::core::account::{
    BankAccount, OverdraftAccount, SavingsAccount, DEFAULT_INTEREST_RATE, DEFAULT_OVERDRAFT_LIMIT,
};
use crate::core::numbering::AccountNumberGenerator;
use crate::core::traits::Account;
use crate::types::{AccountKind, AccountNumber, AccountSnapshot, LedgerError, Operation};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Defaults applied when an account is opened without its parameter
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    /// Rate for savings accounts opened without one
    pub default_interest_rate: Decimal,
    /// Limit for overdraft accounts opened without one
    pub default_overdraft_limit: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_interest_rate: DEFAULT_INTEREST_RATE,
            default_overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        }
    }
}

impl LedgerConfig {
    /// Create a LedgerConfig with custom values
    ///
    /// A positive overdraft limit falls back to the default.
    pub fn new(default_interest_rate: Decimal, default_overdraft_limit: Decimal) -> Self {
        let default = Self::default();

        let default_overdraft_limit = if default_overdraft_limit > Decimal::ZERO {
            warn!(
                limit = %default_overdraft_limit,
                fallback = %default.default_overdraft_limit,
                "invalid default overdraft limit, using fallback"
            );
            default.default_overdraft_limit
        } else {
            default_overdraft_limit
        };

        Self {
            default_interest_rate,
            default_overdraft_limit,
        }
    }
}

/// In-memory ledger
///
/// Owns its own [`AccountNumberGenerator`], so the first account it opens is
/// number 1 regardless of accounts created elsewhere in the process.
///
/// # Examples
///
/// ```
/// use account_ledger::{AccountKind, Ledger, LedgerConfig};
/// use rust_decimal::Decimal;
///
/// let mut ledger = Ledger::new(LedgerConfig::default());
/// let number = ledger
///     .open(AccountKind::Savings, "Mercedes", Decimal::new(200, 0), None)
///     .unwrap();
///
/// ledger.apply_interest(number).unwrap();
/// assert_eq!(ledger.balance(number).unwrap(), Decimal::new(210, 0));
/// ```
#[derive(Debug, Default)]
pub struct Ledger {
    config: LedgerConfig,
    numbers: AccountNumberGenerator,
    accounts: BTreeMap<AccountNumber, Box<dyn Account>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(config: LedgerConfig) -> Self {
        Ledger {
            config,
            numbers: AccountNumberGenerator::new(),
            accounts: BTreeMap::new(),
        }
    }

    /// The defaults this ledger opens accounts with
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Apply a single operation
    ///
    /// Returns the number of the account the operation touched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The operation was denied by the account (see [`LedgerError::is_denial`])
    /// - The account does not exist
    /// - The account does not support the operation
    /// - An overdraft account is opened with a positive limit
    pub fn process(&mut self, operation: Operation) -> Result<AccountNumber, LedgerError> {
        let name = operation.name();

        let account = match operation {
            Operation::Open {
                kind,
                holder,
                initial_balance,
                parameter,
            } => self.open(kind, holder, initial_balance, parameter)?,
            Operation::Deposit { account, amount } => {
                self.deposit(account, amount)?;
                account
            }
            Operation::Withdraw { account, amount } => {
                self.withdraw(account, amount)?;
                account
            }
            Operation::ApplyInterest { account } => {
                self.apply_interest(account)?;
                account
            }
        };

        debug!(operation = name, account, "operation applied");
        Ok(account)
    }

    /// Open an account and return its number
    ///
    /// `parameter` is the interest rate for savings accounts and the
    /// overdraft limit for overdraft accounts; `None` takes the configured
    /// default. It is ignored for standard accounts.
    pub fn open(
        &mut self,
        kind: AccountKind,
        holder: impl Into<String>,
        initial_balance: Decimal,
        parameter: Option<Decimal>,
    ) -> Result<AccountNumber, LedgerError> {
        let account: Box<dyn Account> = match kind {
            AccountKind::Standard => Box::new(BankAccount::with_generator(
                &self.numbers,
                holder,
                initial_balance,
            )),
            AccountKind::Savings => Box::new(SavingsAccount::with_generator(
                &self.numbers,
                holder,
                initial_balance,
                parameter.unwrap_or(self.config.default_interest_rate),
            )),
            AccountKind::Overdraft => {
                let limit = parameter.unwrap_or(self.config.default_overdraft_limit);
                // Checked before construction so a rejected open uses no number
                if limit > Decimal::ZERO {
                    return Err(LedgerError::InvalidOverdraftLimit { limit });
                }
                Box::new(OverdraftAccount::with_generator(
                    &self.numbers,
                    holder,
                    initial_balance,
                    limit,
                ))
            }
        };

        let number = account.account_number();
        self.accounts.insert(number, account);
        Ok(number)
    }

    /// Credit `amount` to an account
    pub fn deposit(&mut self, account: AccountNumber, amount: Decimal) -> Result<(), LedgerError> {
        self.account_mut(account)?.deposit(amount)
    }

    /// Debit `amount` from an account under its variant's rule
    pub fn withdraw(&mut self, account: AccountNumber, amount: Decimal) -> Result<(), LedgerError> {
        self.account_mut(account)?.withdraw(amount)
    }

    /// Credit interest to a savings account, returning the amount credited
    pub fn apply_interest(&mut self, account: AccountNumber) -> Result<Decimal, LedgerError> {
        let target = self.account_mut(account)?;
        let kind = target.kind();

        match target.as_interest_bearing_mut() {
            Some(bearing) => bearing.apply_interest(),
            None => Err(LedgerError::unsupported_operation(
                account,
                kind.as_str(),
                "interest",
            )),
        }
    }

    /// Current balance of an account
    pub fn balance(&self, account: AccountNumber) -> Result<Decimal, LedgerError> {
        self.account(account)
            .map(|found| found.balance())
            .ok_or_else(|| LedgerError::account_not_found(account))
    }

    /// Look up an account
    pub fn account(&self, account: AccountNumber) -> Option<&dyn Account> {
        self.accounts.get(&account).map(|boxed| &**boxed)
    }

    /// Snapshots of all accounts, ordered by account number
    pub fn accounts(&self) -> Vec<AccountSnapshot> {
        self.accounts.values().map(|account| account.snapshot()).collect()
    }

    /// Number of accounts this ledger has opened
    pub fn total_accounts(&self) -> u64 {
        self.numbers.issued()
    }

    fn account_mut(
        &mut self,
        account: AccountNumber,
    ) -> Result<&mut Box<dyn Account>, LedgerError> {
        self.accounts
            .get_mut(&account)
            .ok_or_else(|| LedgerError::account_not_found(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn open_demo_accounts(ledger: &mut Ledger) -> (AccountNumber, AccountNumber, AccountNumber) {
        let standard = ledger
            .open(AccountKind::Standard, "Paulette", Decimal::new(100, 0), None)
            .unwrap();
        let savings = ledger
            .open(AccountKind::Savings, "Mercedes", Decimal::new(200, 0), None)
            .unwrap();
        let overdraft = ledger
            .open(AccountKind::Overdraft, "Danny", Decimal::new(50, 0), None)
            .unwrap();
        (standard, savings, overdraft)
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new(LedgerConfig::default());
        assert!(ledger.accounts().is_empty());
        assert_eq!(ledger.total_accounts(), 0);
    }

    #[test]
    fn test_open_assigns_sequential_numbers() {
        let mut ledger = Ledger::default();
        let (standard, savings, overdraft) = open_demo_accounts(&mut ledger);

        assert_eq!((standard, savings, overdraft), (1, 2, 3));
        assert_eq!(ledger.total_accounts(), 3);
    }

    #[test]
    fn test_open_uses_config_defaults() {
        let mut ledger = Ledger::new(LedgerConfig::new(Decimal::new(1, 1), Decimal::new(-200, 0)));
        let savings = ledger
            .open(AccountKind::Savings, "S", Decimal::new(100, 0), None)
            .unwrap();
        let overdraft = ledger
            .open(AccountKind::Overdraft, "O", Decimal::ZERO, None)
            .unwrap();

        assert_eq!(ledger.apply_interest(savings).unwrap(), Decimal::new(10, 0));
        assert!(ledger.withdraw(overdraft, Decimal::new(201, 0)).is_err());
        ledger.withdraw(overdraft, Decimal::new(200, 0)).unwrap();
        assert_eq!(ledger.balance(overdraft).unwrap(), Decimal::new(-200, 0));
    }

    #[test]
    fn test_open_parameter_overrides_default() {
        let mut ledger = Ledger::default();
        let savings = ledger
            .open(AccountKind::Savings, "S", Decimal::new(100, 0), Some(Decimal::new(2, 2)))
            .unwrap();

        assert_eq!(ledger.apply_interest(savings).unwrap(), Decimal::new(2, 0));
    }

    #[test]
    fn test_open_rejects_positive_overdraft_limit() {
        let mut ledger = Ledger::default();

        let result = ledger.open(
            AccountKind::Overdraft,
            "O",
            Decimal::ZERO,
            Some(Decimal::new(10, 0)),
        );

        assert_eq!(
            result,
            Err(LedgerError::InvalidOverdraftLimit {
                limit: Decimal::new(10, 0)
            })
        );
        assert_eq!(ledger.total_accounts(), 0);
    }

    #[test]
    fn test_open_clamps_negative_initial_balance() {
        let mut ledger = Ledger::default();
        let number = ledger
            .open(AccountKind::Standard, "P", Decimal::new(-10, 0), None)
            .unwrap();
        assert_eq!(ledger.balance(number).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_demo_scenario_through_ledger() {
        let mut ledger = Ledger::default();
        let (standard, savings, overdraft) = open_demo_accounts(&mut ledger);

        assert!(ledger.deposit(standard, Decimal::new(-10, 0)).unwrap_err().is_denial());
        assert!(ledger.withdraw(standard, Decimal::new(9999, 0)).unwrap_err().is_denial());
        ledger.withdraw(standard, Decimal::new(20, 0)).unwrap();

        ledger.apply_interest(savings).unwrap();

        ledger.withdraw(overdraft, Decimal::new(900, 0)).unwrap();
        assert!(ledger.withdraw(overdraft, Decimal::new(5000, 0)).unwrap_err().is_denial());

        let balances: Vec<Decimal> = ledger.accounts().iter().map(|a| a.balance).collect();
        assert_eq!(
            balances,
            vec![Decimal::new(80, 0), Decimal::new(210, 0), Decimal::new(-850, 0)]
        );
    }

    #[rstest]
    #[case::standard(AccountKind::Standard)]
    #[case::overdraft(AccountKind::Overdraft)]
    fn test_interest_unsupported(#[case] kind: AccountKind) {
        let mut ledger = Ledger::default();
        let number = ledger.open(kind, "X", Decimal::new(100, 0), None).unwrap();

        let result = ledger.apply_interest(number);

        assert_eq!(
            result,
            Err(LedgerError::unsupported_operation(number, kind.as_str(), "interest"))
        );
        assert_eq!(ledger.balance(number).unwrap(), Decimal::new(100, 0));
    }

    #[rstest]
    #[case::deposit(Operation::Deposit { account: 99, amount: Decimal::ONE })]
    #[case::withdraw(Operation::Withdraw { account: 99, amount: Decimal::ONE })]
    #[case::interest(Operation::ApplyInterest { account: 99 })]
    fn test_unknown_account(#[case] operation: Operation) {
        let mut ledger = Ledger::default();
        assert_eq!(
            ledger.process(operation),
            Err(LedgerError::account_not_found(99))
        );
    }

    #[test]
    fn test_process_dispatches() {
        let mut ledger = Ledger::default();

        let opened = ledger
            .process(Operation::Open {
                kind: AccountKind::Standard,
                holder: "Paulette".to_string(),
                initial_balance: Decimal::new(100, 0),
                parameter: None,
            })
            .unwrap();
        let deposited = ledger
            .process(Operation::Deposit {
                account: opened,
                amount: Decimal::new(5, 0),
            })
            .unwrap();

        assert_eq!(opened, 1);
        assert_eq!(deposited, 1);
        assert_eq!(ledger.balance(1).unwrap(), Decimal::new(105, 0));
    }

    #[test]
    fn test_accounts_are_snapshots_in_number_order() {
        let mut ledger = Ledger::default();
        open_demo_accounts(&mut ledger);

        let snapshots = ledger.accounts();

        let numbers: Vec<AccountNumber> = snapshots.iter().map(|s| s.number).collect();
        let kinds: Vec<AccountKind> = snapshots.iter().map(|s| s.kind).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(
            kinds,
            vec![AccountKind::Standard, AccountKind::Savings, AccountKind::Overdraft]
        );
        assert_eq!(snapshots[0].holder, "Paulette");
    }

    #[test]
    fn test_account_lookup() {
        let mut ledger = Ledger::default();
        let number = ledger
            .open(AccountKind::Savings, "Mercedes", Decimal::ONE, None)
            .unwrap();

        let account = ledger.account(number).unwrap();
        assert_eq!(account.holder_name(), "Mercedes");
        assert!(ledger.account(number + 1).is_none());
        assert_eq!(
            ledger.balance(number + 1),
            Err(LedgerError::account_not_found(number + 1))
        );
    }

    #[rstest]
    #[case::valid(Decimal::new(-500, 0), Decimal::new(-500, 0))]
    #[case::zero(Decimal::ZERO, Decimal::ZERO)]
    #[case::positive_falls_back(Decimal::new(500, 0), DEFAULT_OVERDRAFT_LIMIT)]
    fn test_config_new(#[case] limit: Decimal, #[case] expected: Decimal) {
        let config = LedgerConfig::new(Decimal::new(3, 2), limit);
        assert_eq!(config.default_interest_rate, Decimal::new(3, 2));
        assert_eq!(config.default_overdraft_limit, expected);
    }
}
