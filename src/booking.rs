//! Booking request assembly and price summary.
//!
//! The builder turns a validated [`DateRange`] into the wire-format request
//! the remote booking API expects, re-checking guest capacity in case the
//! venue record changed since the dates were selected.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::{AvailabilityEngine, DateRange};
use crate::error::GuestCountError;

/// A venue as referenced by the booking flow.
///
/// Owned by the remote system; the client holds a read-only snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Server-assigned venue id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Nightly price, in the API's currency.
    pub price_per_night: f64,
    /// Maximum number of guests per booking.
    pub max_guests: u32,
}

/// Wire-format reservation request for `POST /bookings`.
///
/// Both bounds are ISO-8601 date-times; dates are sent at midnight UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub guests: u32,
    pub venue_id: String,
}

/// Price summary for a prospective stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingQuote {
    /// Number of nights in the stay.
    pub nights: i64,
    /// Total price: nights times the nightly rate.
    pub total: f64,
}

/// Assembles validated reservation requests.
pub struct BookingRequestBuilder;

impl BookingRequestBuilder {
    /// Build a request for the given stay.
    ///
    /// Guest capacity is re-validated here: the venue record may have
    /// changed between date selection and submission.
    pub fn build(
        range: &DateRange,
        guests: u32,
        venue: &Venue,
    ) -> Result<BookingRequest, GuestCountError> {
        AvailabilityEngine::validate_guest_count(guests, venue.max_guests)?;
        Ok(BookingRequest {
            date_from: midnight_utc(range.start()),
            date_to: midnight_utc(range.end()),
            guests,
            venue_id: venue.id.clone(),
        })
    }

    /// Price summary for a stay at the venue.
    pub fn quote(range: &DateRange, venue: &Venue) -> BookingQuote {
        let nights = range.nights();
        BookingQuote {
            nights,
            total: nights as f64 * venue.price_per_night,
        }
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_hms_opt(0, 0, 0).unwrap(), Utc)
}
