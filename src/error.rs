use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the throttler
#[derive(Error, Debug)]
pub enum ThrottlerError {
    #[error("Missing interface specifier - call with --help to get information")]
    MissingInterface,

    #[error("Invalid byte quantity: '{0}'")]
    InvalidQuantity(String),

    #[error("Error opening {}, permissions?", .path.display())]
    StatsSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not find interface {interface} in {}", .path.display())]
    InterfaceNotFound { interface: String, path: PathBuf },

    #[error("Failed to execute action: {0}")]
    Action(#[source] io::Error),
}

/// Result type alias for the throttler
pub type Result<T> = std::result::Result<T, ThrottlerError>;

impl ThrottlerError {
    /// Create an invalid quantity error
    pub fn invalid_quantity<S: Into<String>>(input: S) -> Self {
        ThrottlerError::InvalidQuantity(input.into())
    }

    /// Create a statistics source error
    pub fn stats_source<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ThrottlerError::StatsSource {
            path: path.into(),
            source,
        }
    }

    /// Create an interface not found error
    pub fn interface_not_found<S: Into<String>, P: Into<PathBuf>>(interface: S, path: P) -> Self {
        ThrottlerError::InterfaceNotFound {
            interface: interface.into(),
            path: path.into(),
        }
    }
}
