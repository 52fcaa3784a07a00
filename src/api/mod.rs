//! HTTP access to the quotes backend.

mod client;
pub mod endpoints;
mod error;
pub mod session;

pub use client::{ApiClient, ApiResponse};
pub use error::ApiError;
pub use session::{auto_login, check_logged_in, ProbeOutcome};
