use std::fmt;
use std::time::Duration;

use ip_selector_client::JobStatus;

/// Token for a job accepted by the backend.
///
/// Only the most recently accepted handle may start a poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobHandle(pub(crate) u64);

impl JobHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job#{}", self.0)
    }
}

/// How a poll loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Backend reported `Success` or `Pending`; the candidate list was refreshed.
    Completed(JobStatus),
    /// A status request failed; carries the banner text.
    Failed(String),
    /// Attempt cap or deadline reached.
    TimedOut { attempts: u32, waited: Duration },
    /// Another loop was already running. No request was made.
    AlreadyPolling,
    /// The handle is not the active job. No request was made.
    Superseded,
}

impl JobOutcome {
    /// `true` for outcomes that issued no request at all.
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::AlreadyPolling | Self::Superseded)
    }
}

/// Client-side view of the selection job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum JobPhase {
    #[default]
    Idle,
    Submitting,
    Polling(JobHandle),
    Terminal(JobOutcome),
}

impl JobPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting | Self::Polling(_))
    }
}
