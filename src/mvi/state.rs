//! Base trait for store state.

/// Marker trait for state objects held by a store.
///
/// States should be:
/// - Cloneable (subscribers receive snapshots)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
