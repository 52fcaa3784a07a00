//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use famous_quotes::analytics::{AnalyticsBatch, AnalyticsTransport, ManualClock};
use famous_quotes::config::ApiConfig;
use famous_quotes::state::{GlobalReducer, Quote, Quotelist, User};
use parking_lot::Mutex;

/// Transport that keeps every batch it is handed.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    batches: Arc<Mutex<Vec<AnalyticsBatch>>>,
}

impl RecordingTransport {
    pub fn batches(&self) -> Vec<AnalyticsBatch> {
        self.batches.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.batches.lock().len()
    }
}

impl AnalyticsTransport for RecordingTransport {
    fn send(&self, batch: AnalyticsBatch) {
        self.batches.lock().push(batch);
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Reducer with a recording transport and a clock frozen at `start_time()`.
pub fn recording_reducer() -> (GlobalReducer, RecordingTransport, Arc<ManualClock>) {
    let transport = RecordingTransport::default();
    let clock = Arc::new(ManualClock::new(start_time()));
    let reducer = GlobalReducer::new(Arc::new(transport.clone())).with_clock(clock.clone());
    (reducer, transport, clock)
}

pub fn quote(id: u64) -> Quote {
    Quote::new(id, format!("Quote number {id}"), "Anon")
}

pub fn quotes(ids: impl IntoIterator<Item = u64>) -> Vec<Quote> {
    ids.into_iter().map(quote).collect()
}

pub fn quotelist(id: u64, quote_ids: &[u64]) -> Quotelist {
    Quotelist {
        id,
        name: format!("List {id}"),
        external_id: format!("ext{id}"),
        quotes: quotes(quote_ids.iter().copied()),
    }
}

pub fn user_with_lists(id: u64, lists: Vec<Quotelist>) -> User {
    User {
        quotelists: Some(lists),
        ..User::new(id)
    }
}

pub fn api_config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Poll `check` until it returns true or `timeout` elapses.
pub async fn wait_until<F, Fut>(timeout: Duration, mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
