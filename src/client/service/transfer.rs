use dioxus_logger::tracing;

use crate::{
    client::{
        api::FlightApi,
        error::TransferError,
        service::{ConsoleService, Outcome},
        store::{ActionKey, CellFamily, NoticeLevel, StateCell},
        view::candidate::NO_CANDIDATES_TEXT,
        workflow::Applied,
    },
    model::booking::TransferBookingDto,
};

impl<A: FlightApi, K: CellFamily> ConsoleService<A, K> {
    /// Picks a booking of the open flight and loads its possible destinations.
    ///
    /// Destinations are requested for the open flight, which the workflow checks is the
    /// booking's flight. An empty destination list still shows the transfer section, with
    /// submission disabled and an informational notice.
    ///
    /// # Returns
    /// - `Outcome::Completed` - Transfer section shown
    /// - `Outcome::Rejected` - The booking is not on the open flight
    /// - `Outcome::Failed` - Destinations could not be loaded; a danger notice is shown
    /// - `Outcome::Skipped` - Already loading for this booking, or superseded
    pub async fn choose_booking(&self, booking_id: &str) -> Outcome {
        let key = ActionKey::LoadCandidates(booking_id.to_string());
        if !self.begin(&key, None) {
            return Outcome::Skipped;
        }

        let ticket = match self
            .transfer
            .write_with(|workflow| workflow.choose_booking(booking_id))
        {
            Ok(ticket) => ticket,
            Err(err) => {
                self.report_transfer_error(&err);
                self.finish(&key);
                return Outcome::Rejected;
            }
        };

        let outcome = match self
            .api
            .list_transfer_candidates(&ticket.source_flight_id)
            .await
        {
            Ok(candidates) => {
                let empty = candidates.is_empty();

                match self
                    .transfer
                    .write_with(|workflow| workflow.complete_candidates(ticket, candidates))
                {
                    Applied::Applied => {
                        if empty {
                            self.notify(NoticeLevel::Info, NO_CANDIDATES_TEXT);
                        }
                        Outcome::Completed
                    }
                    Applied::Stale => {
                        tracing::debug!("Dropping stale transfer candidates for {}", booking_id);
                        Outcome::Skipped
                    }
                }
            }
            Err(err) => {
                self.report_api_error(Some("Failed to load flights for transfer"), &err);
                Outcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    /// Updates the destination select; an empty value clears the selection.
    pub fn select_destination(&self, value: &str) -> Outcome {
        let selection = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };

        match self
            .transfer
            .write_with(|workflow| workflow.select_destination(selection))
        {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                self.report_transfer_error(&err);
                Outcome::Rejected
            }
        }
    }

    /// Hides the transfer section. Returns whether it was shown.
    pub fn cancel_transfer(&self) -> bool {
        self.transfer.write_with(|workflow| workflow.cancel())
    }

    /// Sends the transfer of the chosen booking to the selected destination.
    ///
    /// On success the flight list and the open flight's bookings are both re-read and the
    /// transfer section is hidden. On failure the section stays as it was, with the same
    /// candidates and selection, and the server's message is shown.
    ///
    /// # Returns
    /// - `Outcome::Completed` - Booking transferred
    /// - `Outcome::Rejected` - No destination selected (or none available); nothing was sent
    /// - `Outcome::Failed` - The server refused the transfer
    /// - `Outcome::Skipped` - This booking's transfer is already being submitted
    pub async fn submit_transfer(&self) -> Outcome {
        let booking_id = self.transfer.read_with(|workflow| {
            workflow.choice().map(|choice| choice.booking.id.clone())
        });

        let Some(booking_id) = booking_id else {
            self.report_transfer_error(&TransferError::NotChoosing);
            return Outcome::Rejected;
        };

        let key = ActionKey::Transfer(booking_id);
        if !self.begin(&key, Some("Transferring booking...")) {
            return Outcome::Skipped;
        }

        let ticket = match self.transfer.write_with(|workflow| workflow.begin_submit()) {
            Ok(ticket) => ticket,
            Err(err) => {
                self.report_transfer_error(&err);
                self.finish(&key);
                return Outcome::Rejected;
            }
        };

        let request = TransferBookingDto {
            new_flight_id: ticket.destination_id.clone(),
        };
        let booking_id = ticket.booking_id.clone();

        let outcome = match self.api.transfer_booking(&booking_id, &request).await {
            Ok(response) => {
                if self
                    .transfer
                    .write_with(|workflow| workflow.complete_submit(ticket, true))
                    == Applied::Stale
                {
                    tracing::debug!("Booking list changed while transferring {}", booking_id);
                }

                self.notify(NoticeLevel::Success, response.message);
                self.refresh_after_booking_change().await;
                Outcome::Completed
            }
            Err(err) => {
                self.transfer
                    .write_with(|workflow| workflow.complete_submit(ticket, false));
                self.report_api_error(None, &err);
                Outcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }
}
