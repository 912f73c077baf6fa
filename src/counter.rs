//! Persistent build counter: read, increment, write, once per invocation.
//!
//! No locking. Single-process, single-run-at-a-time usage is assumed, and
//! concurrent invocations against the same file may race.

use std::fs;
use std::io;
use std::path::Path;

/// Parse stored counter text. Anything that is not a non-negative decimal
/// integer reads as 0, so a corrupt store restarts the sequence instead of
/// failing the run.
pub fn parse_counter(text: &str) -> u64 {
    text.trim().parse().unwrap_or(0)
}

/// Read the persisted counter, defaulting to 0 when the file is missing or
/// unparsable. Never surfaces an error to the caller.
pub fn read_counter(path: &Path) -> u64 {
    fs::read_to_string(path)
        .map(|text| parse_counter(&text))
        .unwrap_or(0)
}

/// Overwrite the store with the decimal representation of `value`,
/// truncating any prior content.
pub fn write_counter(path: &Path, value: u64) -> io::Result<()> {
    fs::write(path, value.to_string())
}

/// Advance the counter by one, persist it, and return the new value.
pub fn next_build(path: &Path) -> io::Result<u64> {
    let next = read_counter(path) + 1;
    write_counter(path, next)?;
    Ok(next)
}
