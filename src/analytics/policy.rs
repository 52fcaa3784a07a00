use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::AnalyticsConfig;
use crate::state::AnalyticsEvent;
use crate::util::parse_event_datetime;

pub const DEFAULT_MAX_EVENTS: usize = 10;
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(30);

/// When a buffered batch is due for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsPolicy {
    /// Flush once the buffer holds this many events.
    pub max_events: usize,
    /// Flush once the oldest buffered event is this old.
    pub max_age: Duration,
}

impl Default for AnalyticsPolicy {
    fn default() -> Self {
        Self {
            max_events: DEFAULT_MAX_EVENTS,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl From<&AnalyticsConfig> for AnalyticsPolicy {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            max_events: config.commit_every_n_events,
            max_age: Duration::from_secs(config.commit_every_n_seconds),
        }
    }
}

impl AnalyticsPolicy {
    /// Evaluated after the newest event has been appended.
    ///
    /// An empty buffer never flushes. A first timestamp that cannot be
    /// parsed only disables the age rule.
    pub fn should_flush(&self, buffer: &[AnalyticsEvent], now: DateTime<Utc>) -> bool {
        let Some(first) = buffer.first() else {
            return false;
        };

        if buffer.len() >= self.max_events {
            return true;
        }

        let Some(started) = parse_event_datetime(&first.datetime) else {
            return false;
        };
        let max_age = TimeDelta::from_std(self.max_age).unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(started) >= max_age
    }
}
