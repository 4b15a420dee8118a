use dioxus_logger::tracing;

use crate::{
    client::{
        api::FlightApi,
        error::{ApiError, TransferError},
        service::{ConsoleService, Outcome},
        store::{ActionKey, CellFamily, NoticeLevel, StateCell},
        view::prompt::delete_booking_prompt,
        workflow::{Applied, OpenFlight},
    },
    model::booking::NewBookingDto,
};

impl<A: FlightApi, K: CellFamily> ConsoleService<A, K> {
    /// Opens the booking list of a flight.
    ///
    /// The list only appears once the bookings are loaded; on failure it stays closed.
    ///
    /// # Returns
    /// - `Outcome::Completed` - Bookings loaded and shown
    /// - `Outcome::Failed` - Bookings could not be loaded; a danger notice is shown
    /// - `Outcome::Skipped` - Already loading this flight, or another flight was opened meanwhile
    pub async fn open_flight(&self, flight_id: &str, destination: &str) -> Outcome {
        let key = ActionKey::OpenFlight(flight_id.to_string());
        if !self.begin(&key, None) {
            return Outcome::Skipped;
        }

        let ticket = self.transfer.write_with(|workflow| {
            workflow.open_flight(OpenFlight {
                flight_id: flight_id.to_string(),
                destination: destination.to_string(),
            })
        });

        let outcome = match self.api.list_bookings(flight_id).await {
            Ok(bookings) => {
                match self
                    .transfer
                    .write_with(|workflow| workflow.complete_bookings(ticket, bookings))
                {
                    Applied::Applied => Outcome::Completed,
                    Applied::Stale => {
                        tracing::debug!("Dropping stale bookings of flight {}", flight_id);
                        Outcome::Skipped
                    }
                }
            }
            Err(err) => {
                self.report_api_error(Some("Failed to load bookings"), &err);
                Outcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    pub fn close_flight(&self) {
        self.transfer.write_with(|workflow| workflow.close());
    }

    /// Adds a booking for `passenger_name` to the open flight.
    ///
    /// # Returns
    /// - `Outcome::Completed` - Booking created; flights and bookings were re-read
    /// - `Outcome::Rejected` - No flight is open or the name is blank, nothing was sent
    /// - `Outcome::Failed` - The server refused the booking; its message is shown
    /// - `Outcome::Skipped` - A booking is already being added to this flight
    pub async fn create_booking(&self, passenger_name: &str) -> Outcome {
        let Some(flight_id) = self.open_flight_id() else {
            self.report_transfer_error(&TransferError::NoOpenFlight);
            return Outcome::Rejected;
        };

        let passenger_name = passenger_name.trim();
        if passenger_name.is_empty() {
            self.report_api_error(
                None,
                &ApiError::Validation("Enter the passenger's full name".to_string()),
            );
            return Outcome::Rejected;
        }

        let key = ActionKey::CreateBooking(flight_id.clone());
        if !self.begin(&key, Some("Adding booking...")) {
            return Outcome::Skipped;
        }

        let body = NewBookingDto {
            passenger_name: passenger_name.to_string(),
        };

        let outcome = match self.api.create_booking(&flight_id, &body).await {
            Ok(response) => {
                self.notify(NoticeLevel::Success, response.message);
                self.refresh_after_booking_change().await;
                Outcome::Completed
            }
            Err(err) => {
                self.report_api_error(None, &err);
                Outcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    /// Confirmation text for deleting a booking of the open flight.
    pub fn delete_booking_prompt(&self, booking_id: &str) -> Option<String> {
        self.transfer.read_with(|workflow| {
            workflow
                .panel()
                .and_then(|panel| panel.bookings.iter().find(|b| b.id == booking_id))
                .map(|booking| delete_booking_prompt(&booking.passenger_name))
        })
    }

    /// Deletes a booking after the user confirmed.
    pub async fn delete_booking(&self, booking_id: &str) -> Outcome {
        let key = ActionKey::DeleteBooking(booking_id.to_string());
        if !self.begin(&key, Some("Deleting booking...")) {
            return Outcome::Skipped;
        }

        let outcome = match self.api.delete_booking(booking_id).await {
            Ok(response) => {
                self.notify(NoticeLevel::Success, response.message);
                self.refresh_after_booking_change().await;
                Outcome::Completed
            }
            Err(err) => {
                self.report_api_error(None, &err);
                Outcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    pub fn open_flight_id(&self) -> Option<String> {
        self.transfer.read_with(|workflow| {
            workflow
                .panel()
                .map(|panel| panel.flight.flight_id.clone())
        })
    }

    /// Re-reads the flight list and the open flight's bookings, reporting each failure.
    pub(crate) async fn refresh_after_booking_change(&self) {
        if let Err(err) = self.reload_flights().await {
            self.report_api_error(Some("Failed to load flights"), &err);
        }

        if let Err(err) = self.reload_open_bookings().await {
            self.report_api_error(Some("Failed to load bookings"), &err);
        }
    }

    /// Re-reads the bookings of the open flight, if one is open.
    pub(crate) async fn reload_open_bookings(&self) -> Result<(), ApiError> {
        let Some(ticket) = self.transfer.read_with(|workflow| workflow.reload_bookings()) else {
            return Ok(());
        };

        let bookings = self.api.list_bookings(&ticket.flight.flight_id).await?;

        if self
            .transfer
            .write_with(|workflow| workflow.complete_bookings(ticket, bookings))
            == Applied::Stale
        {
            tracing::debug!("Dropping stale booking reload");
        }

        Ok(())
    }
}
