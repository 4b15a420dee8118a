use crate::model::{airplane::AirplaneDto, flight::FlightDto};

/// Last-fetched airplane and flight lists.
///
/// Lists are only ever replaced as a whole with a fresh server response, never patched, so
/// the cache cannot drift from the server beyond the age of the last read.
///
/// Flight reads are numbered when issued. A response is applied only if no later read has
/// been applied already, so a slow refresh cannot overwrite a newer post-mutation read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetStore {
    airplanes: Vec<AirplaneDto>,
    flights: Vec<FlightDto>,
    flights_issued: u64,
    flights_applied: u64,
}

/// Totals shown in the statistics strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetStats {
    pub flights: usize,
    pub airplanes: usize,
    pub bookings: i64,
}

impl FleetStore {
    pub fn new(airplanes: Vec<AirplaneDto>, flights: Vec<FlightDto>) -> Self {
        Self {
            airplanes,
            flights,
            ..Self::default()
        }
    }

    pub fn airplanes(&self) -> &[AirplaneDto] {
        &self.airplanes
    }

    pub fn flights(&self) -> &[FlightDto] {
        &self.flights
    }

    pub fn replace_airplanes(&mut self, airplanes: Vec<AirplaneDto>) {
        self.airplanes = airplanes;
    }

    /// Numbers a flight-list read about to be sent.
    pub fn begin_flights_read(&mut self) -> u64 {
        self.flights_issued += 1;
        self.flights_issued
    }

    /// Replaces the flight list with the response to `read`. Returns `false` and keeps the
    /// cache when a later read was applied first.
    pub fn complete_flights_read(&mut self, read: u64, flights: Vec<FlightDto>) -> bool {
        if read <= self.flights_applied {
            return false;
        }

        self.flights_applied = read;
        self.flights = flights;
        true
    }

    pub fn find_flight(&self, flight_id: &str) -> Option<&FlightDto> {
        self.flights.iter().find(|f| f.id == flight_id)
    }

    pub fn stats(&self) -> FleetStats {
        FleetStats {
            flights: self.flights.len(),
            airplanes: self.airplanes.len(),
            bookings: self.flights.iter().map(|f| f.bookings_count).sum(),
        }
    }
}
