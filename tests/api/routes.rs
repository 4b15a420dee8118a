use flightdesk::client::{api::ApiRoutes, config::ClientConfig};

/// Expect every endpoint to hang off the configured base without doubled slashes
#[test]
fn routes_follow_configured_base() {
    let config = ClientConfig::from_values(Some("https://desk.example.com/api/"), None).unwrap();
    let routes = ApiRoutes::new(config.api_base_url);

    assert_eq!(routes.flights(), "https://desk.example.com/api/flights");
    assert_eq!(
        routes.transfer_candidates("f1"),
        "https://desk.example.com/api/flights/f1/available-transfer"
    );
    assert_eq!(
        routes.booking_transfer("b1"),
        "https://desk.example.com/api/bookings/b1/transfer"
    );
}

#[test]
fn default_base_is_same_origin_api() {
    let routes = ApiRoutes::new(ClientConfig::default().api_base_url);

    assert_eq!(routes.flight_bookings("f1"), "/api/flights/f1/bookings");
}
