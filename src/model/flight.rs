use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::airplane::AirplaneDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightDto {
    pub id: String,
    pub destination: String,
    pub departure_datetime: NaiveDateTime,
    pub airplane: AirplaneDto,
    /// Seats left, computed by the server from capacity and bookings
    pub available_seats: i64,
    pub bookings_count: i64,
}

/// Body of `POST /flights` and `PUT /flights/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightFormDto {
    /// Value of a `datetime-local` input, e.g. `2025-03-01T10:30`
    pub departure_datetime: String,
    pub destination: String,
    pub airplane_id: String,
}

/// A flight eligible to receive a transferred booking
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferCandidateDto {
    pub id: String,
    pub departure_datetime: NaiveDateTime,
    pub airplane_name: String,
    pub available_seats: i64,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub bookings_count: Option<i64>,
}
