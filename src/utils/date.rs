use chrono::{Local, NaiveDate, TimeZone, Utc};

/// Milliseconds in one day; intervals are stored in (possibly fractional) days.
pub const DAY_MS: i64 = 86_400_000;

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar day before `d`, if representable.
pub fn yesterday(d: NaiveDate) -> Option<NaiveDate> {
    d.pred_opt()
}

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a millisecond timestamp in local time, `YYYY-MM-DD HH:MM`.
pub fn format_millis(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => ms.to_string(),
    }
}
