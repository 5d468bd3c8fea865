//! Month-grid presentation state for the booking calendar.
//!
//! The presenter owns the month cursor and the in-progress selection, and
//! turns clicks into state-machine transitions backed by the availability
//! engine. Rendering output is purely derived data; nothing here touches
//! the network or the wall clock.

use chrono::{Datelike, NaiveDate};

use crate::error::SelectionError;

use super::dates::DateRange;
use super::engine::{AvailabilityEngine, DateStatus, Selection};
use super::reservations::ReservationSet;

/// Month names for the cursor label, January first.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Get the number of days in a month.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

// ============================================================================
// Month Cursor
// ============================================================================

/// Zero-based month plus year; the cursor for one calendar view.
///
/// Lives only as long as the view itself and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    month0: u32,
    year: i32,
}

impl MonthCursor {
    /// Create a cursor at the given month (0 = January).
    pub fn new(month0: u32, year: i32) -> Self {
        Self {
            month0: month0.min(11),
            year,
        }
    }

    /// Cursor for the month containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            month0: date.month0(),
            year: date.year(),
        }
    }

    /// Zero-based month (0 = January).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Move forward one month, rolling the year over at December.
    pub fn advance(&mut self) {
        if self.month0 == 11 {
            self.month0 = 0;
            self.year += 1;
        } else {
            self.month0 += 1;
        }
    }

    /// Move back one month, rolling the year over at January.
    pub fn retreat(&mut self) {
        if self.month0 == 0 {
            self.month0 = 11;
            self.year -= 1;
        } else {
            self.month0 -= 1;
        }
    }

    /// Human-readable label, e.g. "June 2024".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }

    /// Number of day cells in the active month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month0 + 1)
    }

    /// Number of empty cells before day 1 in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.date_for_day(1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// The date of `day` within the active month, if the day exists.
    pub fn date_for_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }
}

// ============================================================================
// Calendar Presenter
// ============================================================================

/// Result of a day-cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The cell is past or blocked and cannot start or end a stay.
    Rejected(DateStatus),
    /// A new check-in date was set.
    Started(NaiveDate),
    /// The selection now forms a complete, conflict-free range.
    Completed(DateRange),
    /// Selection restarted at the clicked date. `notice` is set when the
    /// restart was caused by a conflicting range rather than an earlier
    /// date, so the UI can surface the rejection instead of restarting
    /// silently.
    Restarted {
        start: NaiveDate,
        notice: Option<SelectionError>,
    },
}

/// One renderable day cell of the active month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day number within the month, 1-based.
    pub day: u32,
    /// Full calendar date of the cell.
    pub date: NaiveDate,
    /// Availability classification.
    pub status: DateStatus,
    /// Whether the cell is the selected check-in or checkout date.
    pub is_selected_endpoint: bool,
    /// Whether the cell falls inside the selected range.
    pub is_within_selection: bool,
    /// Whether the cell is today.
    pub is_today: bool,
}

/// Stateful month view over a venue's availability.
pub struct CalendarPresenter {
    cursor: MonthCursor,
    selection: Selection,
}

impl CalendarPresenter {
    /// Open the calendar on the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::for_date(today),
            selection: Selection::default(),
        }
    }

    /// The active month cursor.
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// The in-progress selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Move the view forward one month. Selection is untouched.
    pub fn advance_month(&mut self) {
        self.cursor.advance();
    }

    /// Move the view back one month. Selection is untouched.
    pub fn retreat_month(&mut self) {
        self.cursor.retreat();
    }

    /// Apply a click on a day cell.
    ///
    /// Past and blocked dates are rejected outright. Otherwise the
    /// selection advances: first click sets the check-in, a later click
    /// completes the range when it is valid and conflict-free, and any
    /// other click restarts the selection at the clicked date. A completed
    /// range always restarts on the next click.
    pub fn click(
        &mut self,
        date: NaiveDate,
        reservations: &ReservationSet,
        today: NaiveDate,
    ) -> ClickOutcome {
        let status = AvailabilityEngine::classify_date(date, reservations, today);
        if !status.is_selectable() {
            return ClickOutcome::Rejected(status);
        }

        match (self.selection.start, self.selection.end) {
            (None, _) => {
                self.selection.restart(date);
                ClickOutcome::Started(date)
            }
            (Some(_), Some(_)) => {
                self.selection.restart(date);
                ClickOutcome::Restarted {
                    start: date,
                    notice: None,
                }
            }
            (Some(start), None) => {
                if date <= start {
                    // Earlier (or repeated) date: silent restart.
                    self.selection.restart(date);
                    return ClickOutcome::Restarted {
                        start: date,
                        notice: None,
                    };
                }
                match DateRange::new(start, date) {
                    Ok(range) if reservations.is_range_available(&range) => {
                        self.selection.end = Some(date);
                        ClickOutcome::Completed(range)
                    }
                    _ => {
                        self.selection.restart(date);
                        ClickOutcome::Restarted {
                            start: date,
                            notice: Some(SelectionError::Overlaps),
                        }
                    }
                }
            }
        }
    }

    /// Renderable cells for every day of the active month.
    ///
    /// Purely derived from the cursor, selection, reservations and `today`;
    /// calling this never mutates the presenter.
    pub fn day_cells(&self, reservations: &ReservationSet, today: NaiveDate) -> Vec<DayCell> {
        let selected = self.selected_range();
        (1..=self.cursor.days_in_month())
            .filter_map(|day| self.cursor.date_for_day(day))
            .map(|date| DayCell {
                day: date.day(),
                date,
                status: AvailabilityEngine::classify_date(date, reservations, today),
                is_selected_endpoint: self.selection.start == Some(date)
                    || self.selection.end == Some(date),
                is_within_selection: selected.is_some_and(|r| r.contains(date)),
                is_today: date == today,
            })
            .collect()
    }

    fn selected_range(&self) -> Option<DateRange> {
        match (self.selection.start, self.selection.end) {
            (Some(start), Some(end)) => DateRange::new(start, end).ok(),
            _ => None,
        }
    }
}
