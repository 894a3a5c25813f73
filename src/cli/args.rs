use crate::core::{LedgerConfig, DEFAULT_INTEREST_RATE, DEFAULT_OVERDRAFT_LIMIT};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Run account operations from a CSV script, or the built-in demonstration
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Apply account operations and print the resulting balances", long_about = None)]
pub struct CliArgs {
    /// Operations script; without it the built-in demonstration runs
    #[arg(value_name = "INPUT", help = "Path to the operations CSV file")]
    pub input_file: Option<PathBuf>,

    /// Rate for savings accounts opened without one
    #[arg(
        long = "interest-rate",
        value_name = "RATE",
        help = "Default interest rate for savings accounts (default: 0.05)"
    )]
    pub interest_rate: Option<Decimal>,

    /// Limit for overdraft accounts opened without one
    #[arg(
        long = "overdraft-limit",
        value_name = "LIMIT",
        allow_negative_numbers = true,
        help = "Default overdraft limit, zero or negative (default: -1000)"
    )]
    pub overdraft_limit: Option<Decimal>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level when RUST_LOG is not set (error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    ///
    /// Options that were not given keep their defaults; a positive overdraft
    /// limit is replaced by the default with a warning.
    pub fn to_ledger_config(&self) -> LedgerConfig {
        if self.interest_rate.is_some() || self.overdraft_limit.is_some() {
            LedgerConfig::new(
                self.interest_rate.unwrap_or(DEFAULT_INTEREST_RATE),
                self.overdraft_limit.unwrap_or(DEFAULT_OVERDRAFT_LIMIT),
            )
        } else {
            LedgerConfig::default()
        }
    }
}
