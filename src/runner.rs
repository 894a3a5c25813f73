//! Operations script runner
//!
//! Orchestrates a complete run, delegating:
//! - CSV parsing to `OperationReader` (iterator interface)
//! - Account rules to `Ledger`
//! - CSV output to `csv_format::write_accounts_csv`
//!
//! Rows are streamed one at a time; memory use grows with the number of
//! accounts, not the length of the script.

use crate::core::{Ledger, LedgerConfig};
use crate::io::csv_format::write_accounts_csv;
use crate::io::operation_reader::OperationReader;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Counts of what happened to each row of a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Operations that changed the ledger
    pub applied: usize,
    /// Operations an account denied (non-positive amount, funds, limit)
    pub denied: usize,
    /// Malformed rows and operations the ledger could not apply
    pub rejected: usize,
}

/// Runs an operations script against a fresh ledger
///
/// # Examples
///
/// ```no_run
/// use account_ledger::runner::ScriptRunner;
/// use account_ledger::LedgerConfig;
/// use std::path::Path;
///
/// let runner = ScriptRunner::new(LedgerConfig::default());
/// let mut output = std::io::stdout();
///
/// runner
///     .run(Path::new("operations.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptRunner {
    config: LedgerConfig,
}

impl ScriptRunner {
    /// Create a runner whose ledgers open accounts with `config`
    pub fn new(config: LedgerConfig) -> Self {
        ScriptRunner { config }
    }

    /// Apply every operation in `input_path`, then write the account listing
    ///
    /// # Error Handling
    ///
    /// Fatal errors (file not found, I/O errors, failed output) are returned
    /// immediately. Denials, malformed rows and other per-row failures are
    /// logged and counted, and processing continues.
    pub fn run(&self, input_path: &Path, output: &mut dyn Write) -> Result<RunSummary, LedgerError> {
        let mut ledger = Ledger::new(self.config.clone());
        let reader = OperationReader::new(input_path)?;
        let mut summary = RunSummary::default();

        for result in reader {
            let operation = match result {
                Ok(operation) => operation,
                Err(e) => {
                    warn!(error = %e, "skipping malformed row");
                    summary.rejected += 1;
                    continue;
                }
            };

            let name = operation.name();
            match ledger.process(operation) {
                Ok(_) => summary.applied += 1,
                Err(e) if e.is_denial() => {
                    warn!(operation = name, reason = %e, "transaction denied");
                    summary.denied += 1;
                }
                Err(e) => {
                    warn!(operation = name, error = %e, "operation rejected");
                    summary.rejected += 1;
                }
            }
        }

        write_accounts_csv(&ledger.accounts(), output)?;

        info!(
            accounts = ledger.total_accounts(),
            applied = summary.applied,
            denied = summary.denied,
            rejected = summary.rejected,
            "script processed"
        );

        Ok(summary)
    }
}
