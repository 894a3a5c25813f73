//! Benchmark suite for ledger operations
//!
//! Measures applying operations directly to a `Ledger` and running a full
//! script through `ScriptRunner`, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Workloads are generated in memory: one account of each kind per ten
//! operations, then a mix of deposits, withdrawals (some denied) and interest.

use account_ledger::{AccountKind, Ledger, LedgerConfig, ScriptRunner};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

const KINDS: [AccountKind; 3] = [
    AccountKind::Standard,
    AccountKind::Savings,
    AccountKind::Overdraft,
];

fn main() {
    divan::main();
}

fn account_count(operations: usize) -> usize {
    (operations / 10).max(KINDS.len())
}

/// Apply a mixed workload to a ledger, ignoring denials
#[divan::bench(args = [100, 1_000, 10_000])]
fn ledger_mixed_operations(operations: usize) -> Ledger {
    let mut ledger = Ledger::new(LedgerConfig::default());
    let accounts = account_count(operations);

    for i in 0..accounts {
        ledger
            .open(KINDS[i % KINDS.len()], "holder", Decimal::new(1000, 0), None)
            .expect("Failed to open account");
    }

    for i in 0..operations {
        let account = (i % accounts) as u64 + 1;
        let amount = Decimal::new((i % 500) as i64 + 1, 1);
        let _ = match i % 3 {
            0 => ledger.deposit(account, amount),
            1 => ledger.withdraw(account, amount * Decimal::TEN),
            _ => ledger.apply_interest(account).map(|_| ()),
        };
    }

    ledger
}

fn generate_script(operations: usize) -> String {
    let accounts = account_count(operations);
    let mut script = String::from("type,account,holder,kind,amount,param\n");

    for i in 0..accounts {
        script.push_str(&format!("open,,holder{},{},1000,\n", i, KINDS[i % KINDS.len()]));
    }
    for i in 0..operations {
        let account = i % accounts + 1;
        match i % 3 {
            0 => script.push_str(&format!("deposit,{},,,{}.5,\n", account, i % 50)),
            1 => script.push_str(&format!("withdraw,{},,,{},\n", account, i % 700)),
            _ => script.push_str(&format!("interest,{},,,,\n", account)),
        }
    }

    script
}

/// Run a generated script end to end
#[divan::bench(args = [100, 10_000])]
fn script_runner(bencher: divan::Bencher, operations: usize) {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(generate_script(operations).as_bytes())
        .expect("Failed to write script");
    file.flush().expect("Failed to flush script");

    let runner = ScriptRunner::new(LedgerConfig::default());

    bencher.bench(|| {
        let mut output = Vec::new();
        runner
            .run(file.path(), &mut output)
            .expect("Processing failed")
    });
}
