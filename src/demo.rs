//! Built-in demonstration
//!
//! Opens one account of each variant through the process-wide constructors
//! and walks them through the validation rules, printing every denial and the
//! balances after each step. This is what the binary runs when no script is
//! given.

use crate::core::{
    total_accounts, Account, BankAccount, InterestBearing, OverdraftAccount, SavingsAccount,
};
use crate::types::LedgerError;
use rust_decimal::Decimal;
use std::io::Write;

/// Run the demonstration, writing its report to `output`
///
/// # Errors
///
/// Returns an error if writing fails, or if an operation fails for a reason
/// other than a denial.
pub fn run_demo(output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut standard = BankAccount::new("Paulette", Decimal::new(100, 0));
    let mut savings = SavingsAccount::new("Mercedes", Decimal::new(200, 0), Decimal::new(5, 2));
    let mut overdraft =
        OverdraftAccount::new("Danny", Decimal::new(50, 0), Decimal::new(-1000, 0));

    writeln!(
        output,
        "Account numbers: {} {} {}",
        standard.account_number(),
        savings.account_number(),
        overdraft.account_number()
    )?;
    writeln!(output, "Total accounts: {}", total_accounts())?;

    report(output, standard.deposit(Decimal::new(-10, 0)))?;
    report(output, standard.withdraw(Decimal::new(9999, 0)))?;
    report(output, standard.withdraw(Decimal::new(20, 0)))?;
    print_balance(output, &standard)?;

    report(output, savings.apply_interest().map(|_| ()))?;
    print_balance(output, &savings)?;

    report(output, overdraft.withdraw(Decimal::new(900, 0)))?;
    print_balance(output, &overdraft)?;
    report(output, overdraft.withdraw(Decimal::new(5000, 0)))?;
    print_balance(output, &overdraft)?;

    Ok(())
}

/// Print a denial; pass anything else through
fn report(output: &mut dyn Write, result: Result<(), LedgerError>) -> Result<(), LedgerError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_denial() => {
            writeln!(output, "{}", e)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_balance(output: &mut dyn Write, account: &dyn Account) -> Result<(), LedgerError> {
    writeln!(
        output,
        "{} ({}) balance: {:.2}",
        account.holder_name(),
        account.kind(),
        account.balance()
    )?;
    Ok(())
}
