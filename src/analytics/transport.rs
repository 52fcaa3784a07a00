use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::api::{endpoints, ApiClient};
use crate::state::AnalyticsEvent;

/// Payload of one flush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsBatch {
    /// Logged-in user id, `null` for anonymous sessions.
    pub user: Option<u64>,
    pub data: Vec<AnalyticsEvent>,
}

/// Delivers flushed batches.
///
/// `send` is called from inside the reducer, so it must return without
/// waiting on the network. Failures are the transport's to swallow.
pub trait AnalyticsTransport: Send + Sync {
    fn send(&self, batch: AnalyticsBatch);
}

/// Drops every batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTransport;

impl AnalyticsTransport for NoopTransport {
    fn send(&self, batch: AnalyticsBatch) {
        tracing::trace!(events = batch.data.len(), "Analytics batch dropped");
    }
}

/// Posts batches to the analytics endpoint on a background task.
///
/// Clones share the set of in-flight posts.
#[derive(Clone)]
pub struct HttpAnalyticsTransport {
    client: ApiClient,
    in_flight: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl HttpAnalyticsTransport {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            in_flight: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Posts started and not yet finished.
    pub fn in_flight(&self) -> usize {
        let mut handles = self.in_flight.lock();
        handles.retain(|handle| !handle.is_finished());
        handles.len()
    }

    /// Wait for every post started so far. Used before process exit, when
    /// the runtime would otherwise drop pending requests.
    pub async fn wait_idle(&self) {
        let handles = std::mem::take(&mut *self.in_flight.lock());
        for handle in handles {
            let _ = handle.await;
        }
    }
}

impl AnalyticsTransport for HttpAnalyticsTransport {
    fn send(&self, batch: AnalyticsBatch) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(
                events = batch.data.len(),
                "No async runtime; analytics batch dropped"
            );
            return;
        };

        let client = self.client.clone();
        let handle = runtime.spawn(async move {
            let events = batch.data.len();
            match client.post_json(endpoints::ANALYTICS, &batch).await {
                Ok(response) => {
                    tracing::debug!(events, status = response.status, "Analytics batch sent");
                }
                Err(e) => {
                    tracing::debug!(events, error = %e, "Analytics batch lost");
                }
            }
        });

        let mut handles = self.in_flight.lock();
        handles.retain(|handle| !handle.is_finished());
        handles.push(handle);
    }
}
