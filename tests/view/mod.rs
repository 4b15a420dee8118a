use chrono::NaiveDate;
use flightdesk::{
    client::{
        filter::{filter_flights, Availability, FlightFilter},
        view::{FlightListView, SeatBadge},
    },
    model::{airplane::AirplaneDto, flight::FlightDto},
};

fn flight(id: &str, destination: &str, airplane: &str, available_seats: i64) -> FlightDto {
    FlightDto {
        id: id.to_string(),
        destination: destination.to_string(),
        departure_datetime: NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .unwrap(),
        airplane: AirplaneDto {
            id: format!("{}-plane", id),
            name: airplane.to_string(),
            capacity: 180,
        },
        available_seats,
        bookings_count: 180 - available_seats,
    }
}

/// Expect the grid to show the placeholder when the filter leaves nothing
#[test]
fn filtered_out_grid_shows_placeholder() {
    let flights = vec![
        flight("f1", "Paris", "Boeing 737", 12),
        flight("f2", "Rome", "Airbus A320", 0),
    ];
    let filter = FlightFilter {
        search: "oslo".to_string(),
        ..Default::default()
    };

    let view = FlightListView::build(filter_flights(&flights, &filter));

    assert!(matches!(view, FlightListView::Empty { .. }));
}

#[test]
fn full_flights_get_full_badge() {
    let flights = vec![
        flight("f1", "Paris", "Boeing 737", 12),
        flight("f2", "Rome", "Airbus A320", 0),
    ];
    let filter = FlightFilter {
        availability: Availability::FullOnly,
        ..Default::default()
    };

    let FlightListView::Cards(cards) = FlightListView::build(filter_flights(&flights, &filter))
    else {
        panic!("expected cards");
    };

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].badge, SeatBadge::Full);
    assert_eq!(cards[0].departure, "01.03.2025 10:30");
}
