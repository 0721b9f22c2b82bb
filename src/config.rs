use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_STALE_TIME_SECS};
use crate::interactive::domain::models::FetchMode;
use std::time::Duration;

/// Settings fixed when a search session is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Allow more than one selected icon. When false `select_icon` replaces.
    pub multiple: bool,
    pub debounce: Duration,
    pub mode: FetchMode,
    /// How long a successful result is reused without hitting the network.
    pub stale_time: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            mode: FetchMode::All,
            stale_time: Duration::from_secs(DEFAULT_STALE_TIME_SECS),
        }
    }
}

impl SearchConfig {
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }

    pub fn mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }
}
