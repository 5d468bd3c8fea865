//! HTTP client for the remote venue-booking API.
//!
//! Two independent operations: fetching a venue together with its
//! reservation snapshot, and submitting a booking request. Neither holds
//! state across calls, so an abandoned fetch can simply be dropped and its
//! result discarded. The server remains the conflict arbiter: a rejected
//! submission may mean another client won a race for the same dates, and
//! the caller should re-fetch availability before retrying.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::availability::ReservationSet;
use crate::booking::{BookingRequest, Venue};
use crate::config::ApiConfig;
use crate::error::{FetchError, SubmissionError};
use crate::session::SessionContext;

use super::models::{ApiEnvelope, ApiErrorBody, ConfirmedBooking, VenueDto};

/// Header carrying the registered API key.
const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Client for the remote venue-booking API.
pub struct VenueApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl VenueApiClient {
    /// Build a client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch a venue together with its reservation snapshot.
    ///
    /// The snapshot reflects the server state at fetch time; it goes stale
    /// as soon as any other client books the venue.
    pub async fn fetch_venue(&self, venue_id: &str) -> Result<(Venue, ReservationSet), FetchError> {
        let url = format!("{}/venues/{}?_bookings=true", self.base_url, venue_id);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body.first_message("Failed to fetch venue");
            warn!("Venue fetch failed: {} (status: {})", message, status);
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<VenueDto> = response.json().await?;
        let (venue, reservations) = envelope.data.into_domain()?;
        debug!(
            "Fetched venue {} with {} reservations",
            venue.id,
            reservations.len()
        );
        Ok((venue, reservations))
    }

    /// Submit a booking request on behalf of the session user.
    ///
    /// A non-success response surfaces the server-provided message,
    /// including rejections caused by a stale reservation snapshot.
    /// Submissions are never retried automatically.
    pub async fn submit_booking(
        &self,
        request: &BookingRequest,
        session: &SessionContext,
    ) -> Result<ConfirmedBooking, SubmissionError> {
        let url = format!("{}/bookings", self.base_url);

        let mut req = self
            .http
            .post(&url)
            .bearer_auth(session.bearer_token())
            .json(request);
        if let Some(ref key) = self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body.first_message("Failed to create booking");
            warn!("Booking rejected: {} (status: {})", message, status);
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<ConfirmedBooking> = response.json().await?;
        debug!("Booking confirmed: {}", envelope.data.id);
        Ok(envelope.data)
    }
}
