//! Model-View-Intent (MVI) primitives.
//!
//! These traits describe the unidirectional flow the store is built on.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: self-contained snapshot of client state
//! - **Intent**: user actions or system events (API responses, timers)
//! - **Reducer**: function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
