//! CSV format handling for operation scripts and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to [`Operation`]s
//! - Account listing serialization
//!
//! All functions are pure (no I/O beyond the writer they are handed).

use crate::types::{AccountKind, AccountNumber, AccountSnapshot, LedgerError, Operation};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header of the account listing
pub const ACCOUNTS_HEADER: [&str; 4] = ["account", "kind", "holder", "balance"];

/// CSV record structure for deserialization
///
/// Matches the script format with columns: type, account, holder, kind,
/// amount, param. Which columns are required depends on the type; all of
/// them may be empty or missing.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op: String,
    pub account: Option<AccountNumber>,
    pub holder: Option<String>,
    pub kind: Option<String>,
    pub amount: Option<String>,
    pub param: Option<String>,
}

/// Convert a CsvRecord to an Operation
///
/// This function:
/// - Parses the type string (case-insensitive) into an operation
/// - Parses the amount and param columns into Decimals (if present)
/// - Validates that the columns each operation needs are present
///
/// # Returns
///
/// * `Ok(Operation)` - Successfully converted record
/// * `Err(LedgerError)` - Unknown type or kind, bad number, or missing column
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Operation, LedgerError> {
    let op = csv_record.op.trim().to_lowercase();
    let amount = parse_decimal("amount", csv_record.amount.as_deref())?;

    match op.as_str() {
        "open" => {
            let holder = non_empty(csv_record.holder.as_deref())
                .ok_or_else(|| LedgerError::missing_field("open", "holder"))?;
            let kind = match non_empty(csv_record.kind.as_deref()) {
                Some(kind) => AccountKind::from_str(kind)
                    .map_err(|kind| LedgerError::invalid_account_kind(&kind))?,
                None => AccountKind::Standard,
            };
            let parameter = parse_decimal("param", csv_record.param.as_deref())?;

            Ok(Operation::Open {
                kind,
                holder: holder.to_string(),
                initial_balance: amount.unwrap_or(Decimal::ZERO),
                parameter,
            })
        }
        "deposit" => Ok(Operation::Deposit {
            account: required_account("deposit", csv_record.account)?,
            amount: amount.ok_or_else(|| LedgerError::missing_field("deposit", "amount"))?,
        }),
        "withdraw" => Ok(Operation::Withdraw {
            account: required_account("withdraw", csv_record.account)?,
            amount: amount.ok_or_else(|| LedgerError::missing_field("withdraw", "amount"))?,
        }),
        "interest" => Ok(Operation::ApplyInterest {
            account: required_account("interest", csv_record.account)?,
        }),
        _ => Err(LedgerError::invalid_operation_type(&csv_record.op)),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_decimal(field: &str, value: Option<&str>) -> Result<Option<Decimal>, LedgerError> {
    match non_empty(value) {
        Some(text) => Decimal::from_str(text)
            .map(Some)
            .map_err(|_| LedgerError::invalid_amount(field, text)),
        None => Ok(None),
    }
}

fn required_account(
    operation: &str,
    account: Option<AccountNumber>,
) -> Result<AccountNumber, LedgerError> {
    account.ok_or_else(|| LedgerError::missing_field(operation, "account"))
}

/// Write account snapshots in CSV format
///
/// Writes columns: account, kind, holder, balance. Rows are sorted by account
/// number for deterministic output; balances have four decimal places.
pub fn write_accounts_csv(
    accounts: &[AccountSnapshot],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(ACCOUNTS_HEADER)
        .map_err(|e| write_error("Failed to write CSV header", e))?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.number);

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.number.to_string(),
                account.kind.to_string(),
                account.holder,
                format!("{:.4}", account.balance),
            ])
            .map_err(|e| write_error("Failed to write account record", e))?;
    }

    writer
        .flush()
        .map_err(|e| write_error("Failed to flush output", e))?;

    Ok(())
}

fn write_error(context: &str, error: impl std::fmt::Display) -> LedgerError {
    LedgerError::IoError {
        message: format!("{}: {}", context, error),
    }
}
