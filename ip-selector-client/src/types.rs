use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Envelope `code` that marks a successful call.
pub const SUCCESS_CODE: i64 = 0;

// ============ Envelope ============

/// Response wrapper shared by every backend endpoint.
///
/// ```json
/// {"code": 0, "message": "optional", "data": ...}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Application status code; `0` means success.
    pub code: i64,
    /// Optional human readable message (usually present on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint specific payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the envelope reports application-level success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Split the envelope into its payload or an [`ClientError::Api`].
    pub fn into_result(self) -> Result<Option<T>> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::Api {
                code: self.code,
                message: self.message,
            })
        }
    }
}

// ============ Selection job ============

/// Status of the backend selection job as reported by `GET /api/ip/select/status`.
///
/// The wire form is a bare string. Unknown values are preserved verbatim in
/// [`JobStatus::Other`] so a newer backend never breaks polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    /// No job is running (initial state, or the previous result is still valid).
    Pending,
    /// A job is running.
    Processing,
    /// The last job finished successfully.
    Success,
    /// Any other status string.
    Other(String),
}

impl JobStatus {
    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Success => "Success",
            Self::Other(s) => s,
        }
    }

    /// Whether polling may stop and the candidate list be refreshed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Pending)
    }
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => Self::Pending,
            "Processing" => Self::Processing,
            "Success" => Self::Success,
            _ => Self::Other(value),
        }
    }
}

impl From<JobStatus> for String {
    fn from(value: JobStatus) -> Self {
        match value {
            JobStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Candidates ============

/// One row of the selection result, as an ordered list of opaque fields.
///
/// The backend derives rows from the speed test CSV, so the first field is the
/// IP address and the remaining ones are measurements. Nothing here assumes a
/// column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRecord {
    fields: Vec<String>,
}

impl CandidateRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// All fields in backend order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, if present.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<String>> for CandidateRecord {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

// ============ Requests ============

/// Body of `POST /api/dns/sync`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncDnsRequest {
    /// Address the DNS record should point at.
    pub ip: String,
}

// ============ Configuration ============

/// Connection settings for [`HttpSelectionBackend`](crate::HttpSelectionBackend).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://127.0.0.1:8080`. A path prefix is allowed.
    pub base_url: String,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Whole-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl ClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
        }
    }
}
