use super::netdev::NET_DEV_PATH;
use crate::error::{Result, ThrottlerError};
use std::ffi::OsString;
use std::path::PathBuf;

/// Byte thresholds. `None` means the limit is not configured; `Some(0)` is a
/// real zero-byte limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_upload: Option<u64>,
    pub max_download: Option<u64>,
    pub max_total: Option<u64>,
}

impl Limits {
    /// True when at least one threshold is configured
    pub fn any_set(&self) -> bool {
        self.max_upload.is_some() || self.max_download.is_some() || self.max_total.is_some()
    }
}

/// Everything one run needs, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrottleConfig {
    pub limits: Limits,
    pub interface: String,
    /// Shell command line run when a limit is breached, kept as raw bytes
    pub action: Option<OsString>,
    /// Counter table to read
    pub source: PathBuf,
}

impl ThrottleConfig {
    pub fn new(interface: Option<String>, limits: Limits) -> Result<Self> {
        let interface = interface
            .filter(|name| !name.is_empty())
            .ok_or(ThrottlerError::MissingInterface)?;

        Ok(Self {
            limits,
            interface,
            action: None,
            source: PathBuf::from(NET_DEV_PATH),
        })
    }

    pub fn with_action(mut self, action: Option<OsString>) -> Self {
        self.action = action;
        self
    }

    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.source = source.into();
        self
    }
}
