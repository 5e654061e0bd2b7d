//! Time related utils.

use chrono::FixedOffset;
use chrono::Utc;

/// DateTime is alias of [`chrono::DateTime<chrono::Utc>`].
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current UTC time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format the given time as an HTTP date like `Sun, 06 Nov 1994 08:49:37 GMT`.
///
/// The day of month is always zero padded.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %T GMT").to_string()
}

/// Format the given time with a custom strftime format, optionally shifted
/// into a fixed offset first.
///
/// The format string is responsible for rendering any timezone suffix.
pub fn format_with(t: DateTime, format: &str, offset: Option<FixedOffset>) -> String {
    match offset {
        Some(off) => t.with_timezone(&off).format(format).to_string(),
        None => t.format(format).to_string(),
    }
}
