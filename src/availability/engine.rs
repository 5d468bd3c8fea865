//! Stateless availability checks and selection validation.
//!
//! The engine combines [`DateRange`] and [`ReservationSet`] queries for
//! calendar rendering and pre-submission validation. Every operation is a
//! pure function of its inputs; in particular "today" is always passed in
//! explicitly rather than read from the wall clock, so results are
//! reproducible and testable.

use chrono::NaiveDate;

use crate::error::{GuestCountError, SelectionError};

use super::dates::DateRange;
use super::reservations::ReservationSet;

/// Classification of a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    /// The date is before today and cannot be selected.
    Past,
    /// The date falls inside an existing reservation.
    Blocked,
    /// The date is open for booking.
    Available,
}

impl DateStatus {
    /// Whether a date with this status may start or end a selection.
    pub fn is_selectable(&self) -> bool {
        matches!(self, DateStatus::Available)
    }
}

/// Progress of a check-in/check-out selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No date chosen yet.
    NoSelection,
    /// Check-in chosen, waiting for checkout.
    StartSelected,
    /// Both endpoints chosen.
    RangeSelected,
}

/// A possibly incomplete pair of selected dates.
///
/// Becomes a [`DateRange`] only once both ends are set and pass
/// [`AvailabilityEngine::validate_selection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Chosen check-in date, if any.
    pub start: Option<NaiveDate>,
    /// Chosen checkout date, if any.
    pub end: Option<NaiveDate>,
}

impl Selection {
    /// Derive the selection state from which endpoints are set.
    pub fn state(&self) -> SelectionState {
        match (self.start, self.end) {
            (None, _) => SelectionState::NoSelection,
            (Some(_), None) => SelectionState::StartSelected,
            (Some(_), Some(_)) => SelectionState::RangeSelected,
        }
    }

    /// Drop both endpoints.
    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    /// Begin a fresh selection at `start`, discarding any previous checkout.
    pub fn restart(&mut self, start: NaiveDate) {
        self.start = Some(start);
        self.end = None;
    }
}

/// Stateless façade over date and reservation queries.
pub struct AvailabilityEngine;

impl AvailabilityEngine {
    /// Classify a date for calendar display.
    ///
    /// Past takes precedence over Blocked when both apply.
    pub fn classify_date(
        date: NaiveDate,
        reservations: &ReservationSet,
        today: NaiveDate,
    ) -> DateStatus {
        if date < today {
            DateStatus::Past
        } else if reservations.is_date_blocked(date) {
            DateStatus::Blocked
        } else {
            DateStatus::Available
        }
    }

    /// Validate a selection into a bookable range.
    ///
    /// Checks run in a fixed order: both endpoints set, checkout strictly
    /// after check-in, check-in not in the past, and no conflict with any
    /// existing reservation.
    pub fn validate_selection(
        selection: &Selection,
        reservations: &ReservationSet,
        today: NaiveDate,
    ) -> Result<DateRange, SelectionError> {
        let (Some(start), Some(end)) = (selection.start, selection.end) else {
            return Err(SelectionError::Incomplete);
        };
        if end <= start {
            return Err(SelectionError::EndBeforeStart);
        }
        if start < today {
            return Err(SelectionError::StartInPast);
        }
        let range =
            DateRange::new(start, end).map_err(|_| SelectionError::EndBeforeStart)?;
        if !reservations.is_range_available(&range) {
            return Err(SelectionError::Overlaps);
        }
        Ok(range)
    }

    /// Validate a guest count against venue capacity.
    pub fn validate_guest_count(count: u32, max_guests: u32) -> Result<u32, GuestCountError> {
        if count < 1 {
            return Err(GuestCountError::BelowMinimum { got: count });
        }
        if count > max_guests {
            return Err(GuestCountError::AboveCapacity {
                got: count,
                max: max_guests,
            });
        }
        Ok(count)
    }
}
