//! Wire types for the remote venue-booking API.
//!
//! The API wraps every successful response body in a `data` envelope and
//! reports failures as `{ "errors": [{ "message": ... }] }`. Records arrive
//! in camelCase with ISO-8601 date-times; conversion into domain types
//! strips times down to calendar dates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::{day_of, DateRange, Reservation, ReservationSet};
use crate::booking::Venue;
use crate::error::FetchError;

/// Envelope wrapping every successful API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// A venue record as returned by `GET /venues/{id}?_bookings=true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    pub max_guests: u32,
    /// Present only when `_bookings=true` was requested.
    #[serde(default)]
    pub bookings: Option<Vec<BookingDto>>,
}

/// A confirmed booking as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub guests: u32,
}

/// A booking confirmed by the server after submission.
pub type ConfirmedBooking = BookingDto;

/// Error payload returned on failed requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorMessage>,
}

/// One server-provided error message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorMessage {
    pub message: String,
}

impl ApiErrorBody {
    /// First server-provided message, with a generic fallback.
    pub fn first_message(&self, fallback: &str) -> String {
        self.errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl TryFrom<&BookingDto> for Reservation {
    type Error = FetchError;

    fn try_from(dto: &BookingDto) -> Result<Self, FetchError> {
        let range = DateRange::new(day_of(dto.date_from), day_of(dto.date_to))
            .map_err(|e| FetchError::Malformed(format!("booking {}: {}", dto.id, e)))?;
        Ok(Reservation::new(dto.id.clone(), range, dto.guests))
    }
}

impl VenueDto {
    /// Split the record into the venue snapshot and its reservation set.
    pub fn into_domain(self) -> Result<(Venue, ReservationSet), FetchError> {
        let reservations = self
            .bookings
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Reservation::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let venue = Venue {
            id: self.id,
            name: self.name,
            price_per_night: self.price,
            max_guests: self.max_guests,
        };
        Ok((venue, ReservationSet::new(reservations)))
    }
}
