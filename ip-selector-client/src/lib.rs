//! # ip-selector-client
//!
//! Client for the IP selection backend: a service that benchmarks candidate
//! address ranges, keeps the best addresses, and points a DNS record at the one
//! an operator picks.
//!
//! ## Endpoints
//!
//! | Operation | Method / Path | Body | `data` |
//! |-----------|---------------|------|--------|
//! | List candidates | `GET /api/ip/select` | - | `[[string]]` |
//! | Submit job | `POST /api/ip/select` | `["cidr", ...]` | - |
//! | Job status | `GET /api/ip/select/status` | - | `"Success" \| "Pending" \| ...` |
//! | Sync DNS | `POST /api/dns/sync` | `{"ip": "..."}` | - |
//! | Health check | `GET /api/server/health_check` | - | - |
//!
//! Every response is wrapped in `{code, message?, data?}`; `code == 0` means success.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ip_selector_client::{ClientConfig, HttpSelectionBackend, SelectionBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpSelectionBackend::new(&ClientConfig::default())?;
//!
//!     backend.submit_selection(&["104.16.0.0/13".to_string()]).await?;
//!     while !backend.selection_status().await?.is_terminal() {
//!         tokio::time::sleep(std::time::Duration::from_secs(2)).await;
//!     }
//!
//!     for record in backend.list_selected().await? {
//!         println!("{}", record.fields().join("  "));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::Api`]: the backend answered with `code != 0`
//! - [`ClientError::NetworkError`] / [`ClientError::Timeout`]: transport failures
//! - [`ClientError::HttpStatus`]: non-2xx HTTP status
//! - [`ClientError::ParseError`]: unexpected response body
//!
//! Nothing is retried here.

mod backend;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use backend::HttpSelectionBackend;
pub use error::{ClientError, Result, UNKNOWN_ERROR_MESSAGE};
pub use traits::SelectionBackend;
pub use types::{
    ApiEnvelope, CandidateRecord, ClientConfig, JobStatus, SUCCESS_CODE, SyncDnsRequest,
};
pub use utils::log_sanitizer;
