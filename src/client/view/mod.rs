//! Pure data to view-model mapping.
//!
//! Components in `client::components` only lay out what these builders produce, so the
//! formatting rules (badges, placeholders, labels, prompts) are testable without a browser.

pub mod airplane;
pub mod booking;
pub mod candidate;
pub mod flight;
pub mod format;
pub mod prompt;

pub use airplane::{AirplaneRowView, AirplaneTableView};
pub use booking::{BookingRowView, BookingTableView};
pub use candidate::{CandidateListView, CandidateOptionView};
pub use flight::{airplane_filter_options, FlightCardView, FlightListView, SeatBadge};
