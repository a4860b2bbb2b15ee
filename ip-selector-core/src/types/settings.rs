//! Panel settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Storage key holding the operator's raw range text.
pub const DEFAULT_STORAGE_KEY: &str = "ip_ranges";

/// Published Cloudflare IPv4 ranges, used until the operator saves their own list.
pub const DEFAULT_RANGES: &[&str] = &[
    "173.245.48.0/20",
    "103.21.244.0/22",
    "103.22.200.0/22",
    "103.31.4.0/22",
    "141.101.64.0/18",
    "108.162.192.0/18",
    "190.93.240.0/20",
    "188.114.96.0/20",
    "197.234.240.0/22",
    "198.41.128.0/17",
    "162.158.0.0/15",
    "104.16.0.0/13",
    "104.24.0.0/14",
    "172.64.0.0/13",
    "131.0.72.0/22",
];

/// How blank lines in the range editor are submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankLinePolicy {
    /// Send empty strings as-is; the backend decides what they mean.
    #[default]
    Preserve,
    /// Drop lines that are empty or whitespace only.
    Skip,
}

/// Tunables for the job lifecycle and the candidate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelSettings {
    /// Delay between two status requests.
    pub poll_interval_ms: u64,
    /// Upper bound on status requests per job.
    pub max_poll_attempts: u32,
    /// Wall-clock budget for one poll loop.
    pub poll_timeout_ms: u64,
    /// How long the success banner stays before reverting to idle.
    pub success_linger_ms: u64,
    /// Index of the IPv4 address inside a candidate record.
    pub address_field: usize,
    pub blank_lines: BlankLinePolicy,
    pub storage_key: String,
    pub default_ranges: Vec<String>,
}

impl PanelSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    pub fn success_linger(&self) -> Duration {
        Duration::from_millis(self.success_linger_ms)
    }

    /// Attempt cap, never below one request.
    pub fn poll_attempt_limit(&self) -> u32 {
        self.max_poll_attempts.max(1)
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2_000,
            max_poll_attempts: 1_000,
            poll_timeout_ms: 2_000_000,
            success_linger_ms: 3_000,
            address_field: 0,
            blank_lines: BlankLinePolicy::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_ranges: DEFAULT_RANGES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_timings() {
        let s = PanelSettings::default();
        assert_eq!(s.poll_interval(), Duration::from_secs(2));
        assert_eq!(s.max_poll_attempts, 1000);
        assert_eq!(s.success_linger(), Duration::from_secs(3));
        assert_eq!(s.blank_lines, BlankLinePolicy::Preserve);
        assert_eq!(s.storage_key, "ip_ranges");
        assert_eq!(s.default_ranges.len(), 15);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: PanelSettings =
            serde_json::from_str(r#"{"pollIntervalMs":500,"blankLines":"skip"}"#).unwrap();
        assert_eq!(s.poll_interval(), Duration::from_millis(500));
        assert_eq!(s.blank_lines, BlankLinePolicy::Skip);
        assert_eq!(s.max_poll_attempts, 1000);
    }

    #[test]
    fn zero_attempt_cap_still_polls_once() {
        let s = PanelSettings {
            max_poll_attempts: 0,
            ..PanelSettings::default()
        };
        assert_eq!(s.poll_attempt_limit(), 1);
    }
}
