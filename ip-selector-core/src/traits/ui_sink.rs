//! Outbound channel for UI transitions

use tokio::sync::mpsc;

use crate::types::UiTransition;

/// Receiver of state transitions emitted by the services.
///
/// Components never touch the rendering directly; the panel owns the
/// [`UiState`](crate::types::UiState) and applies whatever arrives here.
pub trait UiSink: Send + Sync {
    fn emit(&self, transition: UiTransition);
}

/// Forwards transitions over an unbounded tokio channel.
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<UiTransition>,
}

impl ChannelSink {
    /// Create a sink and the receiver the panel loop drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiTransition>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl UiSink for ChannelSink {
    fn emit(&self, transition: UiTransition) {
        if self.tx.send(transition).is_err() {
            log::debug!("UI receiver dropped, transition discarded");
        }
    }
}
