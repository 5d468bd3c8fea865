//! Calendar-date primitives for availability computation.
//!
//! All comparisons happen at day granularity over half-open ranges: a range
//! includes its start date and excludes its end date, so a checkout day can
//! serve as another booking's check-in day. API timestamps are stripped to
//! their date before any comparison.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::RangeError;

/// Number of nights between two dates.
///
/// Fails when the span is zero or negative.
pub fn nights_between(a: NaiveDate, b: NaiveDate) -> Result<i64, RangeError> {
    let nights = (b - a).num_days();
    if nights <= 0 {
        return Err(RangeError::InvalidRange { nights });
    }
    Ok(nights)
}

/// Strip the time-of-day from an API timestamp.
pub fn day_of(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// An inclusive-start, exclusive-end pair of calendar dates.
///
/// Construction goes through [`DateRange::new`], so a held range always
/// spans at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range covering `[start, end)`.
    ///
    /// Zero-or-negative-night ranges are invalid.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        nights_between(start, end)?;
        Ok(Self { start, end })
    }

    /// Check-in date (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Checkout date (exclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of nights the range spans. Positive by construction.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Half-open overlap test.
    ///
    /// A checkout on day D and a check-in on day D do not overlap, so
    /// back-to-back bookings are allowed.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether `date` falls within the range (start inclusive, end exclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Every date from start (inclusive) to end (exclusive), ascending.
    ///
    /// Each call returns a fresh iterator, so enumeration is restartable.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
