//! Unified error type definition

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use ip_selector_client::{ClientError, UNKNOWN_ERROR_MESSAGE};

/// Local precondition failure before a dependent call. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "value")]
pub enum ValidationError {
    /// No candidate row is selected
    #[error("Please select one IP address first")]
    NoSelection,

    /// The selection refers to a table that has since been replaced
    #[error("The selected row is no longer in the candidate list, please select again")]
    StaleSelection,

    /// The selected address is not a dotted-quad IPv4 address
    #[error("Invalid IPv4 address: '{0}'")]
    BadFormat(String),
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Backend rejected the selection job
    #[error("Selection submission failed: {0}")]
    Submission(ClientError),

    /// Status check failed at the transport or application level
    #[error("Status poll failed: {0}")]
    Poll(ClientError),

    /// Candidate list refresh failed
    #[error("Candidate refresh failed: {0}")]
    Fetch(ClientError),

    /// DNS sync request failed
    #[error("DNS sync failed: {0}")]
    Sync(ClientError),

    /// Validation error
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Poll loop gave up before the job reached a terminal status
    #[error("Selection job timed out after {attempts} status checks ({}s)", .waited.as_secs())]
    TimedOut { attempts: u32, waited: Duration },

    /// A job is already being submitted or polled
    #[error("A selection job is already running")]
    JobInProgress,

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Client error (converting from library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, backend rejection, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::JobInProgress | Self::TimedOut { .. } => true,
            Self::Submission(e) | Self::Poll(e) | Self::Fetch(e) | Self::Sync(e) | Self::Client(e) => {
                e.is_expected()
            }
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// Banner text for the operator.
    ///
    /// Backend failures show the server message (or [`UNKNOWN_ERROR_MESSAGE`]);
    /// everything else uses the `Display` form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Submission(e) | Self::Poll(e) | Self::Fetch(e) | Self::Sync(e) | Self::Client(e) => {
                e.user_message()
            }
            other => other.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
