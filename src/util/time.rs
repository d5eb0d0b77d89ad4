//! Browser clock access, kept in one place so reducers can stay pure and
//! take timestamps as arguments.

/// Milliseconds since the epoch, from `Date.now()`.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// History-entry id: `Date.now()` as an integer millisecond count.
pub fn entry_id(now_ms: f64) -> i64 {
    // Date.now() is integral and far below 2^53.
    #[allow(clippy::cast_possible_truncation)]
    let id = now_ms as i64;
    id
}

/// Current time as an ISO-8601 string.
pub fn iso_now() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
