use dioxus_logger::tracing;
use reqwasm::http::Request;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{
        api::{response::decode, routes::ApiRoutes, FlightApi},
        config::ClientConfig,
        error::ApiError,
    },
    model::{
        airplane::AirplaneDto,
        api::{MessageDto, StatusDto},
        booking::{BookingDto, NewBookingDto, TransferBookingDto},
        flight::{FlightDto, FlightFormDto, TransferCandidateDto},
    },
};

/// [`FlightApi`] over the browser's fetch API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    routes: ApiRoutes,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            routes: ApiRoutes::new(config.api_base_url.clone()),
        }
    }
}

/// Sends the request and decodes the response body as `T`.
async fn send<T: DeserializeOwned>(request: Request, fallback: &str) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    tracing::debug!("API responded with status {}", status);

    decode(status, &body, fallback)
}

fn with_json<B: Serialize>(request: Request, body: &B) -> Result<Request, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(request
        .header("Content-Type", "application/json")
        .body(json))
}

impl FlightApi for HttpApi {
    async fn list_airplanes(&self) -> Result<Vec<AirplaneDto>, ApiError> {
        send(
            Request::get(&self.routes.airplanes()),
            "Failed to load airplanes",
        )
        .await
    }

    async fn list_flights(&self) -> Result<Vec<FlightDto>, ApiError> {
        send(Request::get(&self.routes.flights()), "Failed to load flights").await
    }

    async fn list_bookings(&self, flight_id: &str) -> Result<Vec<BookingDto>, ApiError> {
        send(
            Request::get(&self.routes.flight_bookings(flight_id)),
            "Failed to load bookings",
        )
        .await
    }

    async fn list_transfer_candidates(
        &self,
        flight_id: &str,
    ) -> Result<Vec<TransferCandidateDto>, ApiError> {
        send(
            Request::get(&self.routes.transfer_candidates(flight_id)),
            "Failed to load flights for transfer",
        )
        .await
    }

    async fn create_flight(&self, form: &FlightFormDto) -> Result<MessageDto, ApiError> {
        let request = with_json(Request::post(&self.routes.flights()), form)?;

        send(request, "Failed to save flight").await
    }

    async fn update_flight(
        &self,
        flight_id: &str,
        form: &FlightFormDto,
    ) -> Result<MessageDto, ApiError> {
        let request = with_json(Request::put(&self.routes.flight(flight_id)), form)?;

        send(request, "Failed to save flight").await
    }

    async fn delete_flight(&self, flight_id: &str) -> Result<MessageDto, ApiError> {
        send(
            Request::delete(&self.routes.flight(flight_id)),
            "Failed to delete flight",
        )
        .await
    }

    async fn create_booking(
        &self,
        flight_id: &str,
        booking: &NewBookingDto,
    ) -> Result<MessageDto, ApiError> {
        let request = with_json(
            Request::post(&self.routes.flight_bookings(flight_id)),
            booking,
        )?;

        send(request, "Failed to add booking").await
    }

    async fn delete_booking(&self, booking_id: &str) -> Result<MessageDto, ApiError> {
        send(
            Request::delete(&self.routes.booking(booking_id)),
            "Failed to delete booking",
        )
        .await
    }

    async fn transfer_booking(
        &self,
        booking_id: &str,
        request: &TransferBookingDto,
    ) -> Result<MessageDto, ApiError> {
        let http_request = with_json(
            Request::post(&self.routes.booking_transfer(booking_id)),
            request,
        )?;

        send(http_request, "Failed to transfer booking").await
    }

    async fn get_status(&self) -> Result<StatusDto, ApiError> {
        send(Request::get(&self.routes.status()), "Failed to load status").await
    }
}
