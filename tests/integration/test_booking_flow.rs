//! End-to-end flow from venue JSON to a submittable booking request.

use chrono::NaiveDate;
use veranda::{
    ApiEnvelope, AvailabilityEngine, BookingRequestBuilder, CalendarPresenter, ClickOutcome,
    Selection, SelectionError, VenueDto,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const VENUE_JSON: &str = r#"{
    "data": {
        "id": "venue-1",
        "name": "Fjord View Lodge",
        "price": 200.0,
        "maxGuests": 4,
        "bookings": [
            {
                "id": "b1",
                "dateFrom": "2024-06-01T00:00:00.000Z",
                "dateTo": "2024-06-05T00:00:00.000Z",
                "guests": 2
            }
        ]
    }
}"#;

#[test]
fn test_adjacent_checkout_checkin_books_successfully() {
    let envelope: ApiEnvelope<VenueDto> = serde_json::from_str(VENUE_JSON).unwrap();
    let (venue, reservations) = envelope.data.into_domain().unwrap();
    let today = date(2024, 5, 20);

    // Check in on the existing booking's checkout day.
    let mut presenter = CalendarPresenter::new(today);
    presenter.click(date(2024, 6, 5), &reservations, today);
    let outcome = presenter.click(date(2024, 6, 8), &reservations, today);
    let ClickOutcome::Completed(range) = outcome else {
        panic!("expected completed range, got {outcome:?}");
    };

    // Final validation and request assembly.
    let validated =
        AvailabilityEngine::validate_selection(&presenter.selection(), &reservations, today)
            .unwrap();
    assert_eq!(validated, range);

    let request = BookingRequestBuilder::build(&range, 3, &venue).unwrap();
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["dateFrom"], "2024-06-05T00:00:00Z");
    assert_eq!(json["dateTo"], "2024-06-08T00:00:00Z");
    assert_eq!(json["guests"], 3);
    assert_eq!(json["venueId"], "venue-1");

    let quote = BookingRequestBuilder::quote(&range, &venue);
    assert_eq!(quote.nights, 3);
    assert_eq!(quote.total, 600.0);
}

#[test]
fn test_overlapping_selection_is_rejected_and_restarts() {
    let envelope: ApiEnvelope<VenueDto> = serde_json::from_str(VENUE_JSON).unwrap();
    let (_venue, reservations) = envelope.data.into_domain().unwrap();
    let today = date(2024, 5, 20);

    let mut presenter = CalendarPresenter::new(today);
    presenter.click(date(2024, 5, 28), &reservations, today);

    // A stay from May 28 to June 6 would cross the existing booking.
    let outcome = presenter.click(date(2024, 6, 6), &reservations, today);
    assert_eq!(
        outcome,
        ClickOutcome::Restarted {
            start: date(2024, 6, 6),
            notice: Some(SelectionError::Overlaps),
        }
    );
    assert_eq!(presenter.selection().start, Some(date(2024, 6, 6)));
    assert_eq!(presenter.selection().end, None);
}

#[test]
fn test_direct_selection_validation_matches_click_flow() {
    let envelope: ApiEnvelope<VenueDto> = serde_json::from_str(VENUE_JSON).unwrap();
    let (_venue, reservations) = envelope.data.into_domain().unwrap();
    let today = date(2024, 5, 20);

    // Same conflict, expressed as a form-style selection.
    let conflicting = Selection {
        start: Some(date(2024, 6, 3)),
        end: Some(date(2024, 6, 6)),
    };
    assert_eq!(
        AvailabilityEngine::validate_selection(&conflicting, &reservations, today),
        Err(SelectionError::Overlaps)
    );

    let stale = Selection {
        start: Some(date(2024, 5, 19)),
        end: Some(date(2024, 5, 21)),
    };
    assert_eq!(
        AvailabilityEngine::validate_selection(&stale, &reservations, today),
        Err(SelectionError::StartInPast)
    );
}
