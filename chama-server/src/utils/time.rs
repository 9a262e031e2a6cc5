//! Business timezone helpers
//!
//! Due dates are plain calendar dates, so "today" has to be taken in the
//! group's own timezone rather than in UTC.

use chrono::NaiveDate;
use chrono_tz::Tz;

/// Default business timezone (EAT, UTC+3)
pub const DEFAULT_TIMEZONE: &str = "Africa/Nairobi";

/// Parse an IANA timezone name, falling back to [`DEFAULT_TIMEZONE`].
pub fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!(
            "Invalid BUSINESS_TIMEZONE '{}': {}, falling back to {}",
            name,
            e,
            DEFAULT_TIMEZONE
        );
        chrono_tz::Africa::Nairobi
    })
}

/// Current calendar date in `tz`
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}
