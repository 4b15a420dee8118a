use std::collections::HashSet;

use crate::{
    client::view::format::{format_departure, seats_label},
    model::flight::FlightDto,
};

pub const EMPTY_FLIGHTS_TITLE: &str = "No flights";
pub const EMPTY_FLIGHTS_HINT: &str = "Add the first flight";

/// Availability badge of a flight card; purely presentational.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatBadge {
    Available,
    Full,
}

impl SeatBadge {
    pub fn from_available_seats(available_seats: i64) -> Self {
        if available_seats > 0 {
            SeatBadge::Available
        } else {
            SeatBadge::Full
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeatBadge::Available => "Seats available",
            SeatBadge::Full => "Full",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            SeatBadge::Available => "badge-success",
            SeatBadge::Full => "badge-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlightCardView {
    pub id: String,
    pub destination: String,
    pub departure: String,
    pub airplane_name: String,
    pub capacity_label: String,
    pub available_seats: i64,
    pub bookings_count: i64,
    pub badge: SeatBadge,
}

impl From<&FlightDto> for FlightCardView {
    fn from(flight: &FlightDto) -> Self {
        Self {
            id: flight.id.clone(),
            destination: flight.destination.clone(),
            departure: format_departure(&flight.departure_datetime),
            airplane_name: flight.airplane.name.clone(),
            capacity_label: format!("Capacity: {}", seats_label(flight.airplane.capacity as i64)),
            available_seats: flight.available_seats,
            bookings_count: flight.bookings_count,
            badge: SeatBadge::from_available_seats(flight.available_seats),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FlightListView {
    /// Placeholder shown instead of an empty grid
    Empty { title: &'static str, hint: &'static str },
    Cards(Vec<FlightCardView>),
}

impl FlightListView {
    pub fn build<'a>(flights: impl IntoIterator<Item = &'a FlightDto>) -> Self {
        let cards: Vec<FlightCardView> = flights.into_iter().map(FlightCardView::from).collect();

        if cards.is_empty() {
            FlightListView::Empty {
                title: EMPTY_FLIGHTS_TITLE,
                hint: EMPTY_FLIGHTS_HINT,
            }
        } else {
            FlightListView::Cards(cards)
        }
    }
}

/// Distinct airplane names used by `flights`, in first-seen order.
pub fn airplane_filter_options(flights: &[FlightDto]) -> Vec<String> {
    let mut seen = HashSet::new();

    flights
        .iter()
        .map(|f| f.airplane.name.clone())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
