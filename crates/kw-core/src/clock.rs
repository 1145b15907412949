//! Export timestamps in Hong Kong local time.

use chrono::{DateTime, FixedOffset, Utc};

/// Format used for the record store's export column.
pub const EXPORT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hong Kong has no daylight saving, so a fixed UTC+8 offset is exact.
const HONG_KONG_OFFSET_SECS: i32 = 8 * 3600;

/// # Panics
///
/// Never in practice: UTC+8 is within chrono's valid offset range.
#[must_use]
pub fn hong_kong_offset() -> FixedOffset {
    FixedOffset::east_opt(HONG_KONG_OFFSET_SECS).expect("UTC+8 is a valid offset")
}

/// Render `now` as a Hong Kong local export timestamp.
#[must_use]
pub fn export_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&hong_kong_offset())
        .format(EXPORT_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn shifts_utc_to_hong_kong() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 20, 15, 0).unwrap();
        assert_eq!(export_timestamp(now), "2025-03-02 04:15:00");
    }
}
