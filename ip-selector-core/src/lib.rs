//! IP Selector Core Library
//!
//! Operation lifecycle coordinator for the IP selection panel:
//! - submit a selection job and poll it until a terminal status (`SelectionJobController`)
//! - hold the candidate table the operator chooses from (`SelectionResultStore`)
//! - validate the chosen address and sync the DNS record (`DnsSyncGate`)
//! - persist the operator's range text (`RangeInputService`)
//!
//! Services never touch the rendering. They emit [`types::UiTransition`]s through a
//! [`traits::UiSink`], and the front end folds them into a single [`types::UiState`].

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ValidationError};
pub use services::{
    DnsSyncGate, PanelContext, PanelServices, RangeInputService, SelectionJobController,
    SelectionResultStore,
};
pub use traits::{ChannelSink, InMemoryInputStore, InputStore, SelectionBackend, UiSink};
