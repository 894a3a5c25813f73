//! Streaming reader for operation scripts
//!
//! Provides an iterator over [`Operation`]s from a CSV file, delegating
//! format concerns to the csv_format module.
//!
//! ```no_run
//! use account_ledger::io::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("Applying {:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Malformed rows are yielded as Err variants carrying their line number;
//!   iteration continues with the next row

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, Operation};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// CSV reader yielding one operation per row
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<LineTracker<File>>,
    headers: StringRecord,
    record: StringRecord,
    exhausted: bool,
}

impl OperationReader {
    /// Open a script for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and allows rows with
    /// fewer columns than the header.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        // Fields are trimmed per row, after their line has been located
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(LineTracker::new(file));
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            exhausted: false,
        })
    }

    /// Line on which the record just read starts
    fn record_line(&mut self) -> u64 {
        // Bytes up to the end of the record, terminator included
        let end = self.reader.position().byte();
        let last_line = self.reader.get_mut().line_of(end.saturating_sub(1));
        let quoted_newlines = self.record.as_slice().matches('\n').count() as u64;

        last_line.saturating_sub(quoted_newlines)
    }
}

impl Iterator for OperationReader {
    type Item = Result<Operation, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => {
                self.exhausted = true;
                return None;
            }
            Err(e) => {
                // The reader cannot make progress past a failed read
                self.exhausted = e.is_io_error();
                return Some(Err(LedgerError::from(e)));
            }
        }

        let line = self.record_line();
        self.record.trim();

        let result = self
            .record
            .deserialize::<CsvRecord>(Some(&self.headers))
            .map_err(|e| LedgerError::ParseError {
                line: Some(line),
                message: e.to_string(),
            })
            .and_then(convert_csv_record)
            .map_err(|e| e.at_line(line));

        Some(result)
    }
}

/// Byte source that records where newlines fall
///
/// csv skips blank lines and keeps newlines inside quoted fields, so row
/// counts drift from file lines. Offsets are kept only until a lookup passes
/// them; lookups must not go backwards.
#[derive(Debug)]
struct LineTracker<R> {
    inner: R,
    offset: u64,
    passed: u64,
    pending: VecDeque<u64>,
}

impl<R> LineTracker<R> {
    fn new(inner: R) -> Self {
        LineTracker {
            inner,
            offset: 0,
            passed: 0,
            pending: VecDeque::new(),
        }
    }

    /// 1-based line holding the byte at `offset`
    fn line_of(&mut self, offset: u64) -> u64 {
        while self.pending.front().is_some_and(|&newline| newline < offset) {
            self.pending.pop_front();
            self.passed += 1;
        }
        self.passed + 1
    }
}

impl<R: Read> Read for LineTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;

        let start = self.offset;
        self.pending.extend(
            buf[..read]
                .iter()
                .enumerate()
                .filter(|(_, byte)| **byte == b'\n')
                .map(|(i, _)| start + i as u64),
        );
        self.offset += read as u64;

        Ok(read)
    }
}
