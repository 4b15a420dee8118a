//! Client-side state.
//!
//! Each store is a plain struct with read accessors and explicit mutations. Services reach
//! them through [`cell::StateCell`] so the same code runs against Dioxus signals in the
//! browser and `Rc<RefCell<_>>` in tests.

pub mod activity;
pub mod cell;
pub mod fleet;
pub mod notice;
pub mod status;

pub use activity::{ActionKey, ActivityTracker};
pub use cell::{CellFamily, LocalCells, SignalCells, StateCell};
pub use fleet::{FleetStats, FleetStore};
pub use notice::{Notice, NoticeBoard, NoticeLevel};
pub use status::ApiStatus;
