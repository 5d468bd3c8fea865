//! Reservation snapshots for a single venue.
//!
//! A `ReservationSet` is built once per venue load from the remote API's
//! booking records and then only read. The server enforces that confirmed
//! reservations do not overlap; the client does not re-check that and only
//! consumes the set to compute blocked dates.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::dates::DateRange;

/// Read-only snapshot of one confirmed booking on a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Server-assigned booking id.
    pub id: String,
    /// Occupied dates, half-open: the checkout date itself is not blocked.
    pub range: DateRange,
    /// Number of guests on the booking.
    pub guests: u32,
}

impl Reservation {
    /// Create a reservation snapshot.
    pub fn new(id: impl Into<String>, range: DateRange, guests: u32) -> Self {
        Self {
            id: id.into(),
            range,
            guests,
        }
    }
}

/// Immutable collection of the reservations on one venue.
#[derive(Debug, Clone, Default)]
pub struct ReservationSet {
    reservations: Vec<Reservation>,
}

impl ReservationSet {
    /// Build a set from reservation snapshots. Order is irrelevant.
    pub fn new(reservations: Vec<Reservation>) -> Self {
        Self { reservations }
    }

    /// A set with no reservations; every date is available.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of reservations in the set.
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Whether the set holds no reservations.
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Iterate over the reservations.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter()
    }

    /// Whether `date` falls within any reservation's half-open range.
    pub fn is_date_blocked(&self, date: NaiveDate) -> bool {
        self.reservations.iter().any(|r| r.range.contains(date))
    }

    /// Whether `range` conflicts with no reservation in the set.
    ///
    /// This is the authoritative client-side conflict check, using the same
    /// half-open semantics as [`DateRange::overlaps`].
    pub fn is_range_available(&self, range: &DateRange) -> bool {
        !self.reservations.iter().any(|r| r.range.overlaps(range))
    }

    /// All blocked dates falling in the given month, ascending and deduplicated.
    ///
    /// `month0` is zero-based (0 = January), matching the calendar cursor.
    pub fn blocked_dates_in(&self, year: i32, month0: u32) -> Vec<NaiveDate> {
        let blocked: BTreeSet<NaiveDate> = self
            .reservations
            .iter()
            .flat_map(|r| r.range.days())
            .filter(|d| d.year() == year && d.month0() == month0)
            .collect();
        blocked.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateRange {
        DateRange::new(date(from.0, from.1, from.2), date(to.0, to.1, to.2)).unwrap()
    }

    fn sample_set() -> ReservationSet {
        ReservationSet::new(vec![
            Reservation::new("b1", range((2024, 6, 1), (2024, 6, 5)), 2),
            Reservation::new("b2", range((2024, 6, 20), (2024, 6, 22)), 4),
        ])
    }

    #[test]
    fn test_is_date_blocked() {
        let set = sample_set();

        assert!(set.is_date_blocked(date(2024, 6, 1)));
        assert!(set.is_date_blocked(date(2024, 6, 4)));
        assert!(set.is_date_blocked(date(2024, 6, 21)));
    }

    #[test]
    fn test_checkout_date_is_not_blocked() {
        let set = sample_set();

        assert!(!set.is_date_blocked(date(2024, 6, 5)));
        assert!(!set.is_date_blocked(date(2024, 6, 22)));
    }

    #[test]
    fn test_is_range_available() {
        let set = sample_set();

        assert!(set.is_range_available(&range((2024, 6, 10), (2024, 6, 15))));
        assert!(!set.is_range_available(&range((2024, 6, 3), (2024, 6, 6))));
    }

    #[test]
    fn test_back_to_back_booking_is_available() {
        let set = sample_set();

        // Check-in on another booking's checkout day.
        assert!(set.is_range_available(&range((2024, 6, 5), (2024, 6, 8))));
        // Checkout on another booking's check-in day.
        assert!(set.is_range_available(&range((2024, 5, 28), (2024, 6, 1))));
    }

    #[test]
    fn test_empty_set_blocks_nothing() {
        let set = ReservationSet::empty();

        assert!(set.is_empty());
        assert!(!set.is_date_blocked(date(2024, 6, 1)));
        assert!(set.is_range_available(&range((2024, 6, 1), (2024, 6, 30))));
    }

    #[test]
    fn test_blocked_dates_in_month() {
        let set = ReservationSet::new(vec![
            Reservation::new("b1", range((2024, 5, 30), (2024, 6, 2)), 2),
            Reservation::new("b2", range((2024, 6, 1), (2024, 6, 3)), 2),
        ]);

        // June is month0 = 5; overlapping reservations deduplicate.
        assert_eq!(
            set.blocked_dates_in(2024, 5),
            vec![date(2024, 6, 1), date(2024, 6, 2)]
        );
        assert_eq!(
            set.blocked_dates_in(2024, 4),
            vec![date(2024, 5, 30), date(2024, 5, 31)]
        );
    }
}
