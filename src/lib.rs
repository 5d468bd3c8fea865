//! Veranda: client-side availability and booking engine for venue
//! reservations.
//!
//! Customers browse venues and reserve date ranges; this crate implements
//! the algorithmic core of that flow: computing which calendar dates are
//! bookable, validating a proposed stay against a venue's existing
//! reservations, driving the calendar month grid, and assembling the
//! reservation request for the remote booking API.
//!
//! The remote API is the source of truth and the conflict arbiter. This
//! client only performs optimistic validation over an immutable reservation
//! snapshot taken at venue-load time; a submission can still lose a race to
//! another client, in which case the server's rejection is surfaced and the
//! caller must refresh availability before retrying.

pub mod api;
pub mod availability;
pub mod booking;
pub mod config;
pub mod error;
pub mod session;

pub use api::{
    ApiEnvelope, ApiErrorBody, BookingDto, ConfirmedBooking, VenueApiClient, VenueDto,
};
pub use availability::{
    day_of, nights_between, AvailabilityEngine, CalendarPresenter, ClickOutcome, DateRange,
    DateStatus, DayCell, MonthCursor, Reservation, ReservationSet, Selection, SelectionState,
};
pub use booking::{BookingQuote, BookingRequest, BookingRequestBuilder, Venue};
pub use config::{ApiConfig, Config};
pub use error::{
    ConfigError, FetchError, GuestCountError, RangeError, Result, SelectionError, SubmissionError,
    VerandaError,
};
pub use session::SessionContext;
