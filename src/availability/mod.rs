//! Availability and booking-conflict engine.
//!
//! This module is the algorithmic core of the client:
//!
//! - **Date ranges**: half-open calendar-date intervals with overlap tests
//!   and day enumeration
//! - **Reservation snapshots**: the existing bookings on one venue, read
//!   from the remote API and never mutated
//! - **Availability engine**: per-date classification and pre-submission
//!   validation of a proposed stay
//! - **Calendar presenter**: month cursor, click state machine and derived
//!   day cells for the UI layer
//!
//! Everything here is synchronous and pure; the remote API stays the source
//! of truth and conflict arbiter, so these checks are optimistic only.

mod calendar;
mod dates;
mod engine;
mod reservations;

pub use calendar::{CalendarPresenter, ClickOutcome, DayCell, MonthCursor};
pub use dates::{day_of, nights_between, DateRange};
pub use engine::{AvailabilityEngine, DateStatus, Selection, SelectionState};
pub use reservations::{Reservation, ReservationSet};
