//! Fixtures shared by the client unit tests.
//!
//! - `factory` - pure constructors for DTOs with standard test values
//! - `fake_api` - call-recording [`FlightApi`](crate::client::api::FlightApi) with scripted responses
//! - `setup` - a `ConsoleService` wired to the fake API and local cells


pub use fake_api::{ApiCall, FakeApi};
pub use setup::{current_notice, open_paris, test_service, TestService};
