use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDto {
    pub id: String,
    pub passenger_name: String,
    /// Owning flight, omitted by some responses
    #[serde(default)]
    pub flight_id: Option<String>,
}

/// Body of `POST /flights/{id}/bookings`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBookingDto {
    pub passenger_name: String,
}

/// Body of `POST /bookings/{id}/transfer`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferBookingDto {
    pub new_flight_id: String,
}
