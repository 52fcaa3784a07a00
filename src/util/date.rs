use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const EVENT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format the backend expects for analytics timestamps.
pub fn format_event_datetime(at: DateTime<Utc>) -> String {
    at.format(EVENT_FORMAT).to_string()
}

pub fn parse_event_datetime(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, EVENT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Current UTC time, second precision, `YYYY-MM-DD HH:MM:SS`.
pub fn current_date_iso() -> String {
    format_event_datetime(Utc::now())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `%Y-%m-%d`
    Date,
    /// `%Y-%m-%d %H:%M:%S`
    DateTime,
}

impl DateFormat {
    /// Unknown patterns fall back to [`DateFormat::DateTime`].
    pub fn from_pattern(pattern: &str) -> Self {
        match pattern {
            "%Y-%m-%d" => DateFormat::Date,
            _ => DateFormat::DateTime,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Date => "%Y-%m-%d",
            DateFormat::DateTime => EVENT_FORMAT,
        }
    }
}

/// Reformat a backend timestamp for display.
///
/// Accepts RFC 3339 (`2023-02-07T21:20:17.873506Z`), `YYYY-MM-DD HH:MM:SS`
/// with optional fraction, and bare dates. The wall-clock digits are kept
/// as written; no time zone conversion happens.
pub fn friendly_date(raw: &str, format: DateFormat) -> Option<String> {
    let naive = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.format(format.pattern()).to_string())
}
