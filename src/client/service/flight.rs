use crate::{
    client::{
        api::FlightApi,
        error::ApiError,
        service::{ConsoleService, Outcome},
        store::{ActionKey, CellFamily, NoticeLevel, StateCell},
        view::{format::datetime_local_value, prompt::delete_flight_prompt},
    },
    model::flight::{FlightDto, FlightFormDto},
};

/// Contents of the add/edit flight form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightForm {
    /// Flight being edited, `None` when adding a new flight
    pub flight_id: Option<String>,
    pub departure_datetime: String,
    pub destination: String,
    pub airplane_id: String,
}

impl FlightForm {
    /// Form pre-filled with an existing flight.
    pub fn edit(flight: &FlightDto) -> Self {
        Self {
            flight_id: Some(flight.id.clone()),
            departure_datetime: datetime_local_value(&flight.departure_datetime),
            destination: flight.destination.clone(),
            airplane_id: flight.airplane.id.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.flight_id.is_some()
    }

    /// Checks that every field is filled and builds the request body.
    pub fn validate(&self) -> Result<FlightFormDto, ApiError> {
        let departure_datetime = self.departure_datetime.trim();
        let destination = self.destination.trim();
        let airplane_id = self.airplane_id.trim();

        if departure_datetime.is_empty() || destination.is_empty() || airplane_id.is_empty() {
            return Err(ApiError::Validation(
                "Fill in all required fields".to_string(),
            ));
        }

        Ok(FlightFormDto {
            departure_datetime: departure_datetime.to_string(),
            destination: destination.to_string(),
            airplane_id: airplane_id.to_string(),
        })
    }
}

impl<A: FlightApi, K: CellFamily> ConsoleService<A, K> {
    /// Creates or updates a flight from the form.
    ///
    /// # Returns
    /// - `Outcome::Completed` - Flight saved; the flight list was re-read
    /// - `Outcome::Rejected` - A required field is empty, nothing was sent
    /// - `Outcome::Failed` - The server refused the flight; its message is shown
    /// - `Outcome::Skipped` - A save is already running
    pub async fn save_flight(&self, form: &FlightForm) -> Outcome {
        let body = match form.validate() {
            Ok(body) => body,
            Err(err) => {
                self.report_api_error(None, &err);
                return Outcome::Rejected;
            }
        };

        let key = ActionKey::SaveFlight;
        if !self.begin(&key, Some("Saving flight...")) {
            return Outcome::Skipped;
        }

        let result = match &form.flight_id {
            Some(flight_id) => self.api.update_flight(flight_id, &body).await,
            None => self.api.create_flight(&body).await,
        };

        let outcome = match result {
            Ok(response) => {
                self.notify(NoticeLevel::Success, response.message);

                if let Err(err) = self.reload_flights().await {
                    self.report_api_error(Some("Failed to load flights"), &err);
                }
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

    /// Confirmation text for deleting a cached flight.
    ///
    /// # Returns
    /// - `Some(String)` - Prompt naming the destination and any bookings deleted with it
    /// - `None` - The flight is not cached; a danger notice is shown
    pub fn delete_flight_prompt(&self, flight_id: &str) -> Option<String> {
        let prompt = self.fleet.read_with(|fleet| {
            fleet
                .find_flight(flight_id)
                .map(|flight| delete_flight_prompt(&flight.destination, flight.bookings_count))
        });

        if prompt.is_none() {
            self.notify(NoticeLevel::Danger, "Flight not found");
        }

        prompt
    }

    /// Deletes a flight after the user confirmed; the server deletes its bookings too.
    pub async fn delete_flight(&self, flight_id: &str) -> Outcome {
        let key = ActionKey::DeleteFlight(flight_id.to_string());
        if !self.begin(&key, Some("Deleting flight...")) {
            return Outcome::Skipped;
        }

        let outcome = match self.api.delete_flight(flight_id).await {
            Ok(response) => {
                self.notify(NoticeLevel::Success, response.message);

                self.transfer.write_with(|workflow| {
                    let open = workflow
                        .panel()
                        .is_some_and(|panel| panel.flight.flight_id == flight_id);
                    if open {
                        workflow.close();
                    }
                });

                if let Err(err) = self.reload_flights().await {
                    self.report_api_error(Some("Failed to load flights"), &err);
                }
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
}
