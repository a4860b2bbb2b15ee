//! Core type definitions

mod candidate;
mod job;
mod range;
mod settings;
mod ui_state;

pub use candidate::{CandidateRow, RowId};
pub use job::{JobHandle, JobOutcome, JobPhase};
pub use range::AddressRangeList;
pub use settings::{BlankLinePolicy, DEFAULT_RANGES, DEFAULT_STORAGE_KEY, PanelSettings};
pub use ui_state::{SUCCESS_MESSAGE, UiState, UiTransition};

// Re-export client types
pub use ip_selector_client::{CandidateRecord, JobStatus};
