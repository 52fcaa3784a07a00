//! Stateless helpers shared by the reducer, the API layer, and views.

mod date;
mod dedup;
mod password;
mod profanity;
mod value;

pub use date::{
    current_date_iso, format_event_datetime, friendly_date, parse_event_datetime, DateFormat,
};
pub use dedup::{dedup_by, deduplicate};
pub use password::{password_strength, PasswordCheck, PasswordStrength};
pub use profanity::contains_swear_word;
pub use value::get_value;
