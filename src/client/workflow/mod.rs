//! Booking transfer workflow.
//!
//! The workflow is a synchronous state machine. Each network-backed step is split into a
//! `begin` that hands out a ticket stamped with the workflow generation and a `complete`
//! that applies the response only if the ticket is still current, so a response that
//! arrives after the user has moved on is dropped instead of overwriting newer state.

pub mod transfer;

#[cfg(test)]
mod tests;

pub use transfer::{
    Applied, BookingPanel, BookingsTicket, CandidatesTicket, DestinationChoice, OpenFlight,
    SubmitTicket, TransferState, TransferWorkflow,
};
