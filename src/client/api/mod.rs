//! Remote flight API access.
//!
//! `FlightApi` is the seam between the console and the server: services are generic over
//! it so tests can drive them with an in-memory fake, while the browser build uses
//! [`http::HttpApi`]. URL construction and response decoding are pure and live in
//! [`routes`] and [`response`].

#[cfg(feature = "web")]
pub mod http;
pub mod response;
pub mod routes;

use crate::{
    client::error::ApiError,
    model::{
        airplane::AirplaneDto,
        api::{MessageDto, StatusDto},
        booking::{BookingDto, NewBookingDto, TransferBookingDto},
        flight::{FlightDto, FlightFormDto, TransferCandidateDto},
    },
};

#[cfg(feature = "web")]
pub use http::HttpApi;
pub use routes::ApiRoutes;

/// Operations offered by the remote flight API.
///
/// Futures are not required to be `Send`: the console runs on the single-threaded browser
/// event loop. Mutations are never retried by implementations.
#[allow(async_fn_in_trait)]
pub trait FlightApi {
    /// All airplanes, ordered by the server.
    async fn list_airplanes(&self) -> Result<Vec<AirplaneDto>, ApiError>;

    /// All flights with their airplane and computed seat counts.
    async fn list_flights(&self) -> Result<Vec<FlightDto>, ApiError>;

    /// Bookings currently on `flight_id`.
    async fn list_bookings(&self, flight_id: &str) -> Result<Vec<BookingDto>, ApiError>;

    /// Flights a booking currently on `flight_id` may be moved to.
    ///
    /// No eligible flight is an empty list, not an error.
    async fn list_transfer_candidates(
        &self,
        flight_id: &str,
    ) -> Result<Vec<TransferCandidateDto>, ApiError>;

    async fn create_flight(&self, form: &FlightFormDto) -> Result<MessageDto, ApiError>;

    async fn update_flight(
        &self,
        flight_id: &str,
        form: &FlightFormDto,
    ) -> Result<MessageDto, ApiError>;

    /// Deletes the flight; the server cascades the deletion to its bookings.
    async fn delete_flight(&self, flight_id: &str) -> Result<MessageDto, ApiError>;

    async fn create_booking(
        &self,
        flight_id: &str,
        booking: &NewBookingDto,
    ) -> Result<MessageDto, ApiError>;

    async fn delete_booking(&self, booking_id: &str) -> Result<MessageDto, ApiError>;

    /// Moves a booking to another flight. Fails when the target lacks capacity or does not exist.
    async fn transfer_booking(
        &self,
        booking_id: &str,
        request: &TransferBookingDto,
    ) -> Result<MessageDto, ApiError>;

    async fn get_status(&self) -> Result<StatusDto, ApiError>;
}
