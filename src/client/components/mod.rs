pub mod airplane_table;
pub mod bookings;
pub mod confirm;
pub mod filter_bar;
pub mod flight_card;
pub mod flight_form;
pub mod loading;
pub mod navbar;
pub mod notice;
pub mod page;

pub use airplane_table::AirplaneTable;
pub use bookings::BookingsModal;
pub use confirm::{ConfirmDialog, PendingDelete};
pub use filter_bar::FilterBar;
pub use flight_card::FlightCard;
pub use flight_form::FlightFormModal;
pub use loading::LoadingOverlay;
pub use navbar::Navbar;
pub use notice::NoticeToast;
pub use page::Page;
