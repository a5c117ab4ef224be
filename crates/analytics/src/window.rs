//! Half-open time windows for scoping analytics.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// A half-open interval `[start, end)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The calendar month containing `t` (UTC), the window the original
    /// consumption reports were always computed over.
    pub fn calendar_month(t: DateTime<Utc>) -> Self {
        let (year, month) = (t.year(), t.month());
        let start = month_start(year, month);
        let end = if month == 12 {
            month_start(year + 1, 1)
        } else {
            month_start(year, month + 1)
        };
        Self { start, end }
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}

fn month_start(year: i32, month: u32) -> DateTime<Utc> {
    // Day 1 of a month in range is always constructible.
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
