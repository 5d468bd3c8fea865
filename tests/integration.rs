//! Integration tests for the veranda booking client.
//!
//! These exercise the complete client-side flow: a reservation snapshot
//! parsed from API JSON, calendar interaction against it, and assembly of
//! the final booking request. Nothing here touches the network.

#[path = "integration/test_booking_flow.rs"]
mod test_booking_flow;

#[path = "integration/test_calendar_flow.rs"]
mod test_calendar_flow;
