//! Error types for the console client.
//!
//! `ApiError` covers everything that can go wrong talking to the remote API plus
//! client-side validation, `TransferError` covers rejected transfer workflow transitions
//! and `ConfigError` covers invalid build-time configuration. Every variant renders a
//! message that is safe to show to the user as a notice.

use thiserror::Error;

/// Failure of an API operation or of the validation guarding it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected, connection refused).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    ///
    /// `message` is the server's `error` field when it sent one, else the operation's
    /// generic fallback.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A success response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// Required input was missing, the request was not sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A transfer workflow transition that is not allowed from the current state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("No flight is open")]
    NoOpenFlight,
    #[error("Booking {0} is not on the open flight")]
    UnknownBooking(String),
    #[error("Booking {booking_id} belongs to flight {actual}, not the open flight {open}")]
    FlightMismatch {
        booking_id: String,
        open: String,
        actual: String,
    },
    #[error("A transfer is already being submitted")]
    SubmitInProgress,
    #[error("No booking is selected for transfer")]
    NotChoosing,
    #[error("Select a new flight for the transfer")]
    NoDestination,
    #[error("Flight {0} is not an available transfer destination")]
    UnknownDestination(String),
    #[error("There are no available flights for the transfer")]
    NoCandidates,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
