//! Browser console for managing flights, airplanes and passenger bookings.
//!
//! The UI modules (`app`, `components`, `router`, `routes`) only build with the `web`
//! feature. Everything they drive (API trait, stores, workflow, services, view models)
//! is plain Rust so it can be exercised without a browser.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod service;
pub mod store;
pub mod util;
pub mod view;
pub mod workflow;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod router;
#[cfg(feature = "web")]
pub mod routes;

#[cfg(feature = "web")]
pub use app::App;
