pub mod airplane;
pub mod api;
pub mod booking;
pub mod flight;
