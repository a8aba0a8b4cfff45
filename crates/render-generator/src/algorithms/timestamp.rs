//! Timestamp value generators.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

/// Start of the window used for `date-time` attributes (inclusive).
pub const DEFAULT_START: &str = "2000-01-01T00:00:00Z";

/// End of the window used for `date-time` attributes (inclusive).
pub const DEFAULT_END: &str = "2029-12-31T23:59:59Z";

/// Generate a random second-precision timestamp in `[start, end]`.
///
/// An inverted range yields `start`.
pub fn generate_timestamp_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.gen_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
}

/// Generate a timestamp in the default window.
pub fn generate_default_timestamp<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    match (parse_timestamp(DEFAULT_START), parse_timestamp(DEFAULT_END)) {
        (Some(start), Some(end)) => generate_timestamp_range(rng, start, end),
        _ => DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Parse a timestamp in RFC 3339 or `YYYY-MM-DD` form.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
