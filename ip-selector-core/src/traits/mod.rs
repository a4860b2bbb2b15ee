//! Storage and presentation abstraction trait definition

mod input_store;
mod ui_sink;

pub use input_store::{InMemoryInputStore, InputStore};
pub use ui_sink::{ChannelSink, UiSink};

// Re-export backend trait
pub use ip_selector_client::SelectionBackend;
