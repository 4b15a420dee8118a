pub mod airplanes;
pub mod flights;
pub mod not_found;

pub use airplanes::Airplanes;
pub use flights::Flights;
pub use not_found::NotFound;
