//! Error types for the ledger
//!
//! This module defines all error types that can occur while operating on
//! accounts or running an operations script.
//!
//! # Error Categories
//!
//! - **Denials**: Non-positive amounts, insufficient funds, overdraft limit
//!   breaches. The account is left unchanged; see [`LedgerError::is_denial`].
//! - **Ledger Errors**: Unknown accounts, operations a variant does not support
//! - **Script Errors**: Malformed rows, unknown operation types or kinds
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Arithmetic Errors**: Overflow in balance calculations

use super::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Each variant includes the context needed to explain why an operation was
/// rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("Transaction denied: amount {amount} must be positive (account {account})")]
    NonPositiveAmount {
        /// Account the operation targeted
        account: AccountNumber,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal exceeds the balance of an account that cannot go negative
    #[error(
        "Transaction denied: insufficient funds in account {account}: balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal would take an overdraft account below its limit
    #[error(
        "Transaction denied: account {account} would reach {candidate}, below overdraft limit {limit}"
    )]
    OverdraftLimitExceeded {
        /// Account number
        account: AccountNumber,
        /// The account's overdraft limit
        limit: Decimal,
        /// Balance the withdrawal would have produced
        candidate: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// No account with this number exists in the ledger
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The unknown account number
        account: AccountNumber,
    },

    /// The account's variant does not support the operation
    #[error("Account {account} ({kind}) does not support {operation}")]
    UnsupportedOperation {
        /// Account number
        account: AccountNumber,
        /// Kind of the account
        kind: String,
        /// Operation that was attempted
        operation: String,
    },

    /// Overdraft limit above zero
    #[error("Invalid overdraft limit {limit}: must not be positive")]
    InvalidOverdraftLimit {
        /// The rejected limit
        limit: Decimal,
    },

    /// Unknown operation type in a script
    #[error("Invalid operation type '{op}'")]
    InvalidOperationType {
        /// The invalid type string
        op: String,
    },

    /// Unknown account kind in a script
    #[error("Invalid account kind '{kind}'")]
    InvalidAccountKind {
        /// The invalid kind string
        kind: String,
    },

    /// Amount or parameter that is not a decimal number
    #[error("Invalid {field} '{value}'")]
    InvalidAmount {
        /// Column the value came from
        field: String,
        /// The unparseable value
        value: String,
    },

    /// A column the operation requires is empty
    #[error("{operation} requires {field}")]
    MissingField {
        /// Operation type
        operation: String,
        /// The missing column
        field: String,
    },

    /// Malformed script row
    ///
    /// Recoverable: the row is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Whether this is a business-rule denial
    ///
    /// Denials leave the account untouched and are expected during normal
    /// operation; everything else is a malformed request or a failure.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            LedgerError::NonPositiveAmount { .. }
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::OverdraftLimitExceeded { .. }
        )
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(account: AccountNumber, amount: Decimal) -> Self {
        LedgerError::NonPositiveAmount { account, amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an OverdraftLimitExceeded error
    pub fn overdraft_limit_exceeded(
        account: AccountNumber,
        limit: Decimal,
        candidate: Decimal,
    ) -> Self {
        LedgerError::OverdraftLimitExceeded {
            account,
            limit,
            candidate,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an UnsupportedOperation error
    pub fn unsupported_operation(account: AccountNumber, kind: &str, operation: &str) -> Self {
        LedgerError::UnsupportedOperation {
            account,
            kind: kind.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidOperationType error
    pub fn invalid_operation_type(op: &str) -> Self {
        LedgerError::InvalidOperationType { op: op.to_string() }
    }

    /// Create an InvalidAccountKind error
    pub fn invalid_account_kind(kind: &str) -> Self {
        LedgerError::InvalidAccountKind {
            kind: kind.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(field: &str, value: &str) -> Self {
        LedgerError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(operation: &str, field: &str) -> Self {
        LedgerError::MissingField {
            operation: operation.to_string(),
            field: field.to_string(),
        }
    }

    /// Attach a line number to a script error
    ///
    /// Errors that already carry a line keep it. Other errors become a
    /// `ParseError` whose message is their own description.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            LedgerError::ParseError {
                line: Some(existing),
                message,
            } => LedgerError::ParseError {
                line: Some(existing),
                message,
            },
            LedgerError::ParseError { line: None, message } => LedgerError::ParseError {
                line: Some(line),
                message,
            },
            other => LedgerError::ParseError {
                line: Some(line),
                message: other.to_string(),
            },
        }
    }
}
