//! Analytics batching.
//!
//! UI events are buffered in [`ApplicationState::analytics`] and flushed
//! to the backend when [`AnalyticsPolicy`] says so. Delivery is
//! at-most-once: the buffer is cleared as soon as a batch is handed to the
//! transport, whatever happens to the request afterwards.
//!
//! [`ApplicationState::analytics`]: crate::state::ApplicationState::analytics

mod clock;
mod policy;
mod transport;

pub use clock::{Clock, ManualClock, SystemClock};
pub use policy::{AnalyticsPolicy, DEFAULT_MAX_AGE, DEFAULT_MAX_EVENTS};
pub use transport::{AnalyticsBatch, AnalyticsTransport, HttpAnalyticsTransport, NoopTransport};
