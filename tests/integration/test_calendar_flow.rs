//! Calendar navigation and rendering against a reservation snapshot.

use chrono::NaiveDate;
use veranda::{
    CalendarPresenter, DateRange, DateStatus, MonthCursor, Reservation, ReservationSet,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reservations() -> ReservationSet {
    ReservationSet::new(vec![Reservation::new(
        "b1",
        DateRange::new(date(2024, 6, 1), date(2024, 6, 5)).unwrap(),
        2,
    )])
}

#[test]
fn test_navigation_across_year_boundary() {
    let today = date(2024, 12, 15);
    let mut presenter = CalendarPresenter::new(today);
    assert_eq!(presenter.cursor().label(), "December 2024");

    presenter.advance_month();
    assert_eq!(presenter.cursor(), MonthCursor::new(0, 2025));
    assert_eq!(presenter.cursor().label(), "January 2025");

    presenter.retreat_month();
    presenter.retreat_month();
    assert_eq!(presenter.cursor(), MonthCursor::new(10, 2024));
}

#[test]
fn test_rendered_month_marks_blocked_days() {
    let set = reservations();
    let today = date(2024, 5, 20);
    let mut presenter = CalendarPresenter::new(today);
    presenter.advance_month();

    let cells = presenter.day_cells(&set, today);
    assert_eq!(cells.len(), 30);

    let statuses: Vec<DateStatus> = cells.iter().map(|c| c.status).collect();
    // June 1-4 blocked, checkout day June 5 open again.
    assert_eq!(statuses[0], DateStatus::Blocked);
    assert_eq!(statuses[3], DateStatus::Blocked);
    assert_eq!(statuses[4], DateStatus::Available);
    assert_eq!(statuses[29], DateStatus::Available);

    // June 2024 starts on a Saturday in a Sunday-first grid.
    assert_eq!(presenter.cursor().leading_blanks(), 6);
}

#[test]
fn test_rendered_month_marks_past_days_and_today() {
    let set = ReservationSet::empty();
    let today = date(2024, 5, 20);
    let presenter = CalendarPresenter::new(today);

    let cells = presenter.day_cells(&set, today);
    assert_eq!(cells.len(), 31);

    assert!(cells[..19].iter().all(|c| c.status == DateStatus::Past));
    assert!(cells[19].is_today);
    assert_eq!(cells[19].status, DateStatus::Available);
    assert!(cells[20..].iter().all(|c| c.status == DateStatus::Available));
}

#[test]
fn test_selection_survives_navigation_round_trip() {
    let set = reservations();
    let today = date(2024, 5, 20);
    let mut presenter = CalendarPresenter::new(today);

    presenter.click(date(2024, 5, 25), &set, today);
    for _ in 0..14 {
        presenter.advance_month();
    }
    for _ in 0..14 {
        presenter.retreat_month();
    }

    assert_eq!(presenter.cursor(), MonthCursor::new(4, 2024));
    assert_eq!(presenter.selection().start, Some(date(2024, 5, 25)));
}
