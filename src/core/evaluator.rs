//! Threshold evaluation.
//!
//! Compares a counter sample against the configured limits. With no limits
//! set the sample is only reported; otherwise any breached limit fires the
//! action.

use super::config::Limits;
use super::netdev::CounterSample;
use crate::ui::format_size;
use std::fmt;

/// A single limit that the sample went over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breach {
    Upload { observed: u64, limit: u64 },
    Download { observed: u64, limit: u64 },
    Total { observed: u128, limit: u64 },
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Breach::Upload { observed, limit } => write!(
                f,
                "upload {} exceeds {}",
                format_size(observed),
                format_size(limit)
            ),
            Breach::Download { observed, limit } => write!(
                f,
                "download {} exceeds {}",
                format_size(observed),
                format_size(limit)
            ),
            Breach::Total { observed, limit } => write!(
                f,
                "total {} bytes exceeds {}",
                observed,
                format_size(limit)
            ),
        }
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// No limits configured: print the counters
    Report,
    /// At least one limit breached
    Fire(Vec<Breach>),
    /// Limits configured, none breached
    Quiescent,
}

/// Decide what to do with `sample` under `limits`.
///
/// All comparisons are strictly greater-than: a counter equal to its limit
/// does not fire.
pub fn evaluate(limits: &Limits, sample: &CounterSample) -> Decision {
    if !limits.any_set() {
        return Decision::Report;
    }

    let mut breaches = Vec::new();

    if let Some(limit) = limits.max_upload {
        if sample.bytes_transmitted > limit {
            breaches.push(Breach::Upload {
                observed: sample.bytes_transmitted,
                limit,
            });
        }
    }

    if let Some(limit) = limits.max_download {
        if sample.bytes_received > limit {
            breaches.push(Breach::Download {
                observed: sample.bytes_received,
                limit,
            });
        }
    }

    if let Some(limit) = limits.max_total {
        let total = sample.total();
        if total > u128::from(limit) {
            breaches.push(Breach::Total {
                observed: total,
                limit,
            });
        }
    }

    if breaches.is_empty() {
        Decision::Quiescent
    } else {
        Decision::Fire(breaches)
    }
}

/// Status line printed when no limits are configured
pub fn status_line(interface: &str, sample: &CounterSample) -> String {
    format!(
        "Interface {}: Down: {}, Up: {}",
        interface, sample.bytes_received, sample.bytes_transmitted
    )
}
