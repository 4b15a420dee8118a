use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response to a successful mutation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    /// Human-readable confirmation shown to the user verbatim
    pub message: String,
    /// ID of the created record, only present on creation
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusDto {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub stats: Option<StatusStatsDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusStatsDto {
    pub airplanes_count: i64,
    pub flights_count: i64,
    pub bookings_count: i64,
}

impl StatusDto {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
