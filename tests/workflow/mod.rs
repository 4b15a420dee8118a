use chrono::NaiveDate;
use flightdesk::{
    client::{
        error::TransferError,
        workflow::{Applied, OpenFlight, TransferState, TransferWorkflow},
    },
    model::{booking::BookingDto, flight::TransferCandidateDto},
};

fn booking(id: &str, flight_id: &str) -> BookingDto {
    BookingDto {
        id: id.to_string(),
        passenger_name: format!("Passenger {}", id),
        flight_id: Some(flight_id.to_string()),
    }
}

fn candidate(id: &str) -> TransferCandidateDto {
    TransferCandidateDto {
        id: id.to_string(),
        departure_datetime: NaiveDate::from_ymd_opt(2025, 3, 2)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap(),
        airplane_name: "Airbus A320".to_string(),
        available_seats: 5,
        destination: None,
        capacity: None,
        bookings_count: None,
    }
}

/// Walks a booking through open, choose, a refused submit, a retry and a successful submit
#[test]
fn transfer_lifecycle() {
    let mut workflow = TransferWorkflow::default();

    let ticket = workflow.open_flight(OpenFlight {
        flight_id: "f1".to_string(),
        destination: "Paris".to_string(),
    });
    workflow.complete_bookings(ticket, vec![booking("b1", "f1"), booking("b2", "f1")]);

    let ticket = workflow.choose_booking("b1").unwrap();
    assert_eq!(ticket.source_flight_id, "f1");
    workflow.complete_candidates(ticket, vec![candidate("f3"), candidate("f4")]);

    assert_eq!(workflow.begin_submit(), Err(TransferError::NoDestination));

    workflow.select_destination(Some("f4".to_string())).unwrap();
    let ticket = workflow.begin_submit().unwrap();
    assert_eq!(workflow.complete_submit(ticket, false), Applied::Applied);
    assert_eq!(
        workflow.choice().and_then(|c| c.selection.clone()),
        Some("f4".to_string())
    );

    let ticket = workflow.begin_submit().unwrap();
    assert_eq!(workflow.complete_submit(ticket, true), Applied::Applied);
    assert!(matches!(workflow.state(), TransferState::SelectingBooking(_)));
}

/// Expect every pending response to be dropped once the booking list is closed
#[test]
fn close_invalidates_pending_responses() {
    let mut workflow = TransferWorkflow::default();
    let bookings = workflow.open_flight(OpenFlight {
        flight_id: "f1".to_string(),
        destination: "Paris".to_string(),
    });
    workflow.complete_bookings(bookings, vec![booking("b1", "f1")]);
    let candidates = workflow.choose_booking("b1").unwrap();

    workflow.close();

    assert_eq!(
        workflow.complete_candidates(candidates, vec![candidate("f3")]),
        Applied::Stale
    );
    assert_eq!(workflow.state(), &TransferState::Idle);
}
