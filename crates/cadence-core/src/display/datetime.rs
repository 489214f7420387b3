//! Date and time display utilities.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::models::CycleWindow;

/// A `Timestamp` shown in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A calendar date spelled out, e.g. `January 1, 2026`.
pub struct LongDate<'a>(pub &'a Date);

impl fmt::Display for LongDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %-d, %Y"))
    }
}

/// `January 1, 2026 - March 31, 2026`
pub struct CycleDates<'a>(pub &'a CycleWindow);

impl fmt::Display for CycleDates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", LongDate(&self.0.start), LongDate(&self.0.end))
    }
}
