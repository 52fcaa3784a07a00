//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (clicks, navigation)
/// - System events (API responses, session probe results)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
