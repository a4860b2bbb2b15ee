use serde::{Deserialize, Serialize};

/// Message shown when the backend rejects a request without explaining why.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Unified error type for all selection backend calls.
///
/// Transport failures, HTTP-level failures and application-level failures
/// (`code != 0` in the response envelope) are kept apart so callers can decide
/// how to surface them. All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ClientError {
    /// A network-level error occurred (connection refused, reset, DNS failure, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-success HTTP status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The backend answered with `code != 0`.
    Api {
        /// Application error code from the envelope.
        code: i64,
        /// Server-supplied message, if any.
        message: Option<String>,
    },

    /// Failed to parse the backend response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base URL (or a derived endpoint) is not a valid URL.
    InvalidUrl {
        /// The offending URL text.
        url: String,
        /// Parser error.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（后端拒绝、业务错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Text to show the operator.
    ///
    /// Application errors surface the server message verbatim (or
    /// [`UNKNOWN_ERROR_MESSAGE`]); every other variant uses its `Display` form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(UNKNOWN_ERROR_MESSAGE)
                .to_string(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::HttpStatus { status, .. } => write!(f, "Unexpected HTTP status {status}"),
            Self::Api { code, message } => {
                if let Some(msg) = message {
                    write!(f, "Backend error (code {code}): {msg}")
                } else {
                    write!(f, "Backend error (code {code})")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidUrl { url, detail } => write!(f, "Invalid URL '{url}': {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
