//! Remote booking API: wire types and the HTTP client.

mod client;
mod models;

pub use client::VenueApiClient;
pub use models::{
    ApiEnvelope, ApiErrorBody, ApiErrorMessage, BookingDto, ConfirmedBooking, VenueDto,
};
