use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use std::fmt::Display;
use url::{ParseError, Url};

/// Shown for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Replacement for URLs that must not end up in an `href` or `src`
pub const BLOCKED_URL: &str = "#";

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Make a scraped URL safe to use as a link or image source.
///
/// Absolute URLs are kept only for http, https and mailto. Relative references
/// are kept as they are. Everything else (`javascript:`, `data:`, garbage) is
/// replaced with [`BLOCKED_URL`].
pub fn safe_url(raw: &str) -> String {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) => trimmed.to_string(),
        Ok(url) => {
            ::log::debug!("Blocking URL with scheme {}: {}", url.scheme(), trimmed);
            BLOCKED_URL.to_string()
        }
        Err(ParseError::RelativeUrlWithoutBase) => trimmed.to_string(),
        Err(e) => {
            ::log::debug!("Blocking unparsable URL {:?}: {}", trimmed, e);
            BLOCKED_URL.to_string()
        }
    }
}

/// Format a scraped timestamp in the viewer's local time zone
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format a scraped timestamp as `M/D/YYYY, h:mm:ss AM` in the given zone.
///
/// Accepts RFC 3339, a naive ISO-8601 date-time (read as wall-clock time in
/// `tz`) or a bare date (UTC midnight). Anything else yields [`INVALID_DATE`].
/// Wall-clock times skipped by a DST change are moved forward an hour.
pub fn format_timestamp_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match raw.and_then(|raw| parse_timestamp(raw.trim(), tz)) {
        Some(when) => when.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(when) = DateTime::parse_from_rfc3339(raw) {
        return Some(when.with_timezone(tz));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .or_else(|| tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult};

    /// UTC-5, switching to UTC-4 at 2024-03-10 07:00 UTC (02:00 local)
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn switch() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .and_then(|d| d.and_hms_opt(7, 0, 0))
                .unwrap()
        }

        fn offset_at_utc(utc: &NaiveDateTime) -> FixedOffset {
            let hours = if *utc < Self::switch() { -5 } else { -4 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let candidates: Vec<FixedOffset> = [-5, -4]
                .into_iter()
                .map(|hours| FixedOffset::east_opt(hours * 3600).unwrap())
                .filter(|offset| {
                    let utc = *local - TimeDelta::seconds(offset.local_minus_utc() as i64);
                    Self::offset_at_utc(&utc) == *offset
                })
                .collect();
            match candidates.as_slice() {
                [] => LocalResult::None,
                [only] => LocalResult::Single(*only),
                [first, second, ..] => LocalResult::Ambiguous(*first, *second),
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_at_utc(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_at_utc(utc)
        }
    }

    #[test]
    fn test_safe_url_keeps_web_links() {
        assert_eq!(safe_url("https://example.com/a?b=1&c=2"), "https://example.com/a?b=1&c=2");
        assert_eq!(safe_url("  http://example.com "), "http://example.com");
        assert_eq!(safe_url("mailto:someone@example.com"), "mailto:someone@example.com");
        assert_eq!(safe_url("/docs/page.html"), "/docs/page.html");
        assert_eq!(safe_url("page.html#top"), "page.html#top");
    }

    #[test]
    fn test_safe_url_blocks_script_urls() {
        assert_eq!(safe_url("javascript:alert(1)"), BLOCKED_URL);
        assert_eq!(safe_url(" JavaScript:alert(1)"), BLOCKED_URL);
        assert_eq!(safe_url("java\tscript:alert(1)"), BLOCKED_URL);
        assert_eq!(safe_url("data:text/html,<script>alert(1)</script>"), BLOCKED_URL);
        assert_eq!(safe_url("http://[::1"), BLOCKED_URL);
    }

    #[test]
    fn test_format_naive_timestamp() {
        // Python's isoformat() output, no offset
        let formatted = format_timestamp_in(Some("2024-01-15T14:30:05.123456"), &Utc);
        assert_eq!(formatted, "1/15/2024, 2:30:05 PM");

        let formatted = format_timestamp_in(Some("2024-11-03 09:07:00"), &Utc);
        assert_eq!(formatted, "11/3/2024, 9:07:00 AM");
    }

    #[test]
    fn test_format_converts_offsets() {
        let formatted = format_timestamp_in(Some("2024-01-15T23:30:00Z"), &FixedOffset::east_opt(3600).unwrap());
        assert_eq!(formatted, "1/16/2024, 12:30:00 AM");
    }

    #[test]
    fn test_skipped_wall_clock_time_moves_forward() {
        let formatted = format_timestamp_in(Some("2024-03-10T02:30:00"), &SpringForward);
        assert_eq!(formatted, "3/10/2024, 3:30:00 AM");

        // Times either side of the gap are unchanged
        let formatted = format_timestamp_in(Some("2024-03-10T01:59:59"), &SpringForward);
        assert_eq!(formatted, "3/10/2024, 1:59:59 AM");
        let formatted = format_timestamp_in(Some("2024-03-10T03:00:00"), &SpringForward);
        assert_eq!(formatted, "3/10/2024, 3:00:00 AM");
    }

    #[test]
    fn test_format_date_only() {
        let formatted = format_timestamp_in(Some("2024-06-01"), &Utc);
        assert_eq!(formatted, "6/1/2024, 12:00:00 AM");
    }

    #[test]
    fn test_invalid_timestamps() {
        assert_eq!(format_timestamp_in(None, &Utc), INVALID_DATE);
        assert_eq!(format_timestamp_in(Some(""), &Utc), INVALID_DATE);
        assert_eq!(format_timestamp_in(Some("yesterday"), &Utc), INVALID_DATE);
        assert_eq!(format_timestamp_in(Some("2024-13-45T00:00:00"), &Utc), INVALID_DATE);
    }
}
