//! Client-side core of the famous-quotes site.
//!
//! The [`Store`] owns one [`ApplicationState`] and applies [`Action`]s
//! through the [`GlobalReducer`]. UI events are buffered and flushed to
//! the backend by the [`analytics`] batcher; [`api`] holds the HTTP
//! client and the session probe.

pub mod analytics;
pub mod api;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod state;
pub mod store;
pub mod util;

pub use state::{Action, ApplicationState, GlobalReducer};
pub use store::Store;
