/// Builds the URL of every API endpoint from a configured base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRoutes {
    base: String,
}

impl ApiRoutes {
    /// `base` is used as given, so it should not end with a slash.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn airplanes(&self) -> String {
        format!("{}/airplanes", self.base)
    }

    pub fn flights(&self) -> String {
        format!("{}/flights", self.base)
    }

    pub fn flight(&self, flight_id: &str) -> String {
        format!("{}/flights/{}", self.base, flight_id)
    }

    pub fn flight_bookings(&self, flight_id: &str) -> String {
        format!("{}/flights/{}/bookings", self.base, flight_id)
    }

    pub fn transfer_candidates(&self, flight_id: &str) -> String {
        format!("{}/flights/{}/available-transfer", self.base, flight_id)
    }

    pub fn booking(&self, booking_id: &str) -> String {
        format!("{}/bookings/{}", self.base, booking_id)
    }

    pub fn booking_transfer(&self, booking_id: &str) -> String {
        format!("{}/bookings/{}/transfer", self.base, booking_id)
    }

    pub fn status(&self) -> String {
        format!("{}/status", self.base)
    }
}
