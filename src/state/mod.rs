//! Client state: records, actions, and the reducer that ties them together.

mod action;
mod app_state;
pub mod model;
mod reducer;

pub use action::Action;
pub use app_state::{ApplicationState, DEFAULT_MAX_QUOTE_ID};
pub use model::{AnalyticsEvent, Category, Quote, Quotelist, SearchCriteria, SortKey, User};
pub use reducer::{GlobalReducer, DEFAULT_MAX_CACHED_QUOTES};
