use dioxus_logger::tracing;
use futures::future::join;

use crate::{
    client::{
        api::FlightApi,
        error::ApiError,
        service::{ConsoleService, Outcome},
        store::{ActionKey, ApiStatus, CellFamily, NoticeLevel, StateCell},
    },
    model::flight::FlightDto,
};

impl<A: FlightApi, K: CellFamily> ConsoleService<A, K> {
    /// Loads the airplane and flight lists together.
    ///
    /// Both requests are issued concurrently and awaited together. Each list that loads
    /// replaces its cache even if the other request failed, but any failure marks the whole
    /// load as failed.
    ///
    /// # Returns
    /// - `Outcome::Completed` - Both lists were loaded
    /// - `Outcome::Failed` - At least one list failed to load; a danger notice is shown
    /// - `Outcome::Skipped` - An initial load is already running
    pub async fn initial_load(&self) -> Outcome {
        let key = ActionKey::InitialLoad;
        if !self.begin(&key, Some("Loading data...")) {
            return Outcome::Skipped;
        }

        let read = self.fleet.write_with(|fleet| fleet.begin_flights_read());
        let (airplanes, flights) = join(self.api.list_airplanes(), self.api.list_flights()).await;

        let mut first_error: Option<ApiError> = None;

        match airplanes {
            Ok(airplanes) => self.fleet.write_with(|fleet| fleet.replace_airplanes(airplanes)),
            Err(err) => {
                tracing::error!("Failed to load airplanes: {}", err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match flights {
            Ok(flights) => self.apply_flights(read, flights),
            Err(err) => {
                tracing::error!("Failed to load flights: {}", err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        self.finish(&key);

        match first_error {
            Some(err) => {
                self.report_api_error(Some("Failed to load data"), &err);
                Outcome::Failed
            }
            None => {
                self.notify(NoticeLevel::Success, "Data loaded");
                Outcome::Completed
            }
        }
    }

    /// Re-reads the flight list on user request.
    pub async fn refresh_flights(&self) -> Outcome {
        let key = ActionKey::RefreshFlights;
        if !self.begin(&key, Some("Loading flights...")) {
            return Outcome::Skipped;
        }

        let outcome = match self.reload_flights().await {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                self.report_api_error(Some("Failed to load flights"), &err);
                Outcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    /// Re-reads the airplane list on user request.
    pub async fn refresh_airplanes(&self) -> Outcome {
        let key = ActionKey::RefreshAirplanes;
        if !self.begin(&key, Some("Loading airplanes...")) {
            return Outcome::Skipped;
        }

        let outcome = match self.api.list_airplanes().await {
            Ok(airplanes) => {
                self.fleet
                    .write_with(|fleet| fleet.replace_airplanes(airplanes));
                Outcome::Completed
            }
            Err(err) => {
                self.report_api_error(Some("Failed to load airplanes"), &err);
                Outcome::Failed
            }
        };

        self.finish(&key);
        outcome
    }

    /// Loads airplanes only when none are cached, e.g. before showing the flight form.
    pub async fn ensure_airplanes(&self) -> Outcome {
        let cached = self.fleet.read_with(|fleet| !fleet.airplanes().is_empty());
        if cached {
            return Outcome::Completed;
        }

        self.refresh_airplanes().await
    }

    /// Polls the API health endpoint and records the result.
    ///
    /// A failure does not raise a notice; the navbar shows the offline status instead.
    pub async fn check_status(&self) -> Outcome {
        let key = ActionKey::CheckStatus;
        if !self.begin(&key, None) {
            return Outcome::Skipped;
        }

        let (status, outcome) = match self.api.get_status().await {
            Ok(status) => {
                let status = ApiStatus::from_status(status);
                let outcome = if status.is_online() {
                    Outcome::Completed
                } else {
                    Outcome::Failed
                };
                (status, outcome)
            }
            Err(err) => {
                tracing::warn!("Failed to check API status: {}", err);
                (ApiStatus::Offline(err.to_string()), Outcome::Failed)
            }
        };

        self.status.put(status);
        self.finish(&key);
        outcome
    }

    /// Replaces the cached flight list with a fresh read.
    ///
    /// A response overtaken by a later read is dropped and still counts as success.
    pub(crate) async fn reload_flights(&self) -> Result<(), ApiError> {
        let read = self.fleet.write_with(|fleet| fleet.begin_flights_read());
        let flights = self.api.list_flights().await?;
        self.apply_flights(read, flights);

        Ok(())
    }

    fn apply_flights(&self, read: u64, flights: Vec<FlightDto>) {
        if !self
            .fleet
            .write_with(|fleet| fleet.complete_flights_read(read, flights))
        {
            tracing::debug!("Dropping flight list from superseded read {}", read);
        }
    }
}
