use flightdesk::{
    client::{api::response::decode, error::ApiError},
    model::{
        api::{MessageDto, StatusDto},
        booking::BookingDto,
        flight::{FlightDto, TransferCandidateDto},
    },
};

/// Expect a flight list as served by the API to decode with its nested airplane
#[test]
fn decodes_flight_list() {
    let body = r#"[
        {
            "id": "5f1c",
            "destination": "Paris",
            "departure_datetime": "2025-03-01T10:30:00",
            "airplane": {"id": "a1", "name": "Boeing 737", "capacity": 180},
            "available_seats": 177,
            "bookings_count": 3
        }
    ]"#;

    let flights: Vec<FlightDto> = decode(200, body, "Failed to load flights").unwrap();

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].airplane.capacity, 180);
    assert_eq!(flights[0].available_seats, 177);
    assert_eq!(
        flights[0].departure_datetime.format("%H:%M").to_string(),
        "10:30"
    );
}

#[test]
fn decodes_bookings_without_flight_id() {
    let body = r#"[{"id": "b1", "passenger_name": "Anna Ivanova"}]"#;

    let bookings: Vec<BookingDto> = decode(200, body, "Failed to load bookings").unwrap();

    assert_eq!(bookings[0].flight_id, None);
}

/// Expect transfer candidates to decode whether or not the optional fields are sent
#[test]
fn decodes_transfer_candidates() {
    let body = r#"[
        {"id": "f3", "departure_datetime": "2025-03-02T08:00:00", "airplane_name": "Airbus A320", "available_seats": 4},
        {"id": "f4", "departure_datetime": "2025-03-03T08:00:00", "airplane_name": "Boeing 737",
         "available_seats": 1, "destination": "Paris", "capacity": 180, "bookings_count": 179}
    ]"#;

    let candidates: Vec<TransferCandidateDto> =
        decode(200, body, "Failed to load flights for transfer").unwrap();

    assert_eq!(candidates[0].capacity, None);
    assert_eq!(candidates[1].bookings_count, Some(179));
}

#[test]
fn status_reports_database() {
    let body = r#"{"status": "ok", "database": "connected",
        "stats": {"airplanes_count": 2, "flights_count": 5, "bookings_count": 11}}"#;

    let status: StatusDto = decode(200, body, "Failed to load status").unwrap();

    assert!(status.is_ok());
    assert_eq!(status.stats.map(|s| s.bookings_count), Some(11));
}

/// Expect the fallback message when an error body is not JSON
#[test]
fn html_error_page_uses_fallback() {
    let result: Result<MessageDto, ApiError> =
        decode(502, "<html>Bad Gateway</html>", "Failed to delete flight");

    assert_eq!(
        result,
        Err(ApiError::Http {
            status: 502,
            message: "Failed to delete flight".to_string()
        })
    );
}

#[test]
fn malformed_success_body_is_decode_error() {
    let result: Result<Vec<FlightDto>, ApiError> =
        decode(200, r#"{"unexpected": true}"#, "Failed to load flights");

    assert!(matches!(result, Err(ApiError::Decode(_))));
}
