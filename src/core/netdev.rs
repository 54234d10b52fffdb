//! Reader for the kernel's per-interface counter table (`/proc/net/dev`).
//!
//! Each interface row looks like
//! `  eth0: 1234 10 0 0 0 0 0 0 5678 12 0 0 0 0 0 0`: the interface name, a
//! colon, then sixteen counters. The first is received bytes and the ninth is
//! transmitted bytes. Header rows never match because they carry no
//! `name:` prefix followed by numeric fields.

use crate::error::{Result, ThrottlerError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Default location of the counter table on Linux
pub const NET_DEV_PATH: &str = "/proc/net/dev";

const RX_BYTES_FIELD: usize = 0;
const TX_BYTES_FIELD: usize = 8;

/// Cumulative byte counters for one interface since its last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSample {
    pub bytes_received: u64,
    pub bytes_transmitted: u64,
}

impl CounterSample {
    pub fn new(bytes_received: u64, bytes_transmitted: u64) -> Self {
        Self {
            bytes_received,
            bytes_transmitted,
        }
    }

    /// Received plus transmitted, widened so the sum can never wrap
    pub fn total(&self) -> u128 {
        u128::from(self.bytes_received) + u128::from(self.bytes_transmitted)
    }
}

/// Split a row into its interface name and counter fields.
///
/// Every field up to and including the transmitted-bytes column must be a
/// valid `u64`; later columns are not checked.
fn tokenize(line: &str) -> Option<(&str, Vec<u64>)> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let fields = rest
        .split_whitespace()
        .take(TX_BYTES_FIELD + 1)
        .map(|field| field.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    if fields.len() <= TX_BYTES_FIELD {
        return None;
    }

    Some((name, fields))
}

/// Parse one row, returning counters only if it belongs to `interface`.
///
/// The name must match exactly, so querying `eth0` never picks up `eth01`.
pub fn parse_line(line: &str, interface: &str) -> Option<CounterSample> {
    let (name, fields) = tokenize(line)?;
    if name != interface {
        return None;
    }

    Some(CounterSample::new(
        fields[RX_BYTES_FIELD],
        fields[TX_BYTES_FIELD],
    ))
}

/// Scan a table for `interface`. The first matching row wins.
pub fn find_counters<R: BufRead>(reader: R, interface: &str) -> io::Result<Option<CounterSample>> {
    for line in reader.lines() {
        let line = line?;
        if let Some(sample) = parse_line(&line, interface) {
            return Ok(Some(sample));
        }
    }
    Ok(None)
}

/// Names of every well-formed interface row in a table
pub fn list_interfaces<R: BufRead>(reader: R) -> Vec<String> {
    reader
        .lines()
        .map_while(|line| line.ok())
        .filter_map(|line| tokenize(&line).map(|(name, _)| name.to_string()))
        .collect()
}

/// Read the counters of `interface` from the table at `path`.
///
/// The file handle is released before this returns, whether or not the
/// interface was found.
pub fn read_counters(path: &Path, interface: &str) -> Result<CounterSample> {
    log::debug!("Reading counters for {} from {}", interface, path.display());

    let found = {
        let file = File::open(path).map_err(|e| ThrottlerError::stats_source(path, e))?;
        find_counters(BufReader::new(file), interface)
            .map_err(|e| ThrottlerError::stats_source(path, e))?
    };

    match found {
        Some(sample) => {
            log::debug!(
                "{}: received {} bytes, transmitted {} bytes",
                interface,
                sample.bytes_received,
                sample.bytes_transmitted
            );
            Ok(sample)
        }
        None => {
            if log::log_enabled!(log::Level::Debug) {
                if let Ok(file) = File::open(path) {
                    let known = list_interfaces(BufReader::new(file));
                    log::debug!("Interfaces present in {}: {}", path.display(), known.join(", "));
                }
            }
            Err(ThrottlerError::interface_not_found(interface, path))
        }
    }
}
