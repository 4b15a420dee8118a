use crate::client::store::FleetStats;

/// Confirmation text shown before deleting a flight.
///
/// Mentions how many bookings the server will delete along with the flight.
pub fn delete_flight_prompt(destination: &str, bookings_count: i64) -> String {
    let mut prompt = format!("Delete the flight to {}?", destination);

    if bookings_count > 0 {
        prompt.push_str(&format!(
            "\n\nThis flight has {} booking{}. Deleting the flight also deletes all of its bookings.",
            bookings_count,
            if bookings_count == 1 { "" } else { "s" }
        ));
    }

    prompt
}

pub fn delete_booking_prompt(passenger_name: &str) -> String {
    format!("Delete the booking of {}?", passenger_name)
}

pub fn summary_line(stats: &FleetStats) -> String {
    format!(
        "Flights: {} | Airplanes: {} | Bookings: {}",
        stats.flights, stats.airplanes, stats.bookings
    )
}
