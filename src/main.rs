//! Account Ledger CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # built-in demonstration
//! cargo run -- operations.csv > accounts.csv
//! cargo run -- --interest-rate 0.02 --overdraft-limit -500 operations.csv
//! RUST_LOG=debug cargo run -- operations.csv
//! ```
//!
//! With an input file, the program applies every operation in it to a fresh
//! ledger and writes the final account listing to stdout. Denied and
//! malformed operations are logged to stderr. Without one, it runs the
//! built-in demonstration.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output failed, etc.)

use account_ledger::runner::ScriptRunner;
use account_ledger::{cli, demo, logging};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(&args.log_level);

    let mut output = std::io::stdout();
    let result = match &args.input_file {
        Some(input) => ScriptRunner::new(args.to_ledger_config())
            .run(input, &mut output)
            .map(|_| ()),
        None => demo::run_demo(&mut output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
