//! Console service layer.
//!
//! [`ConsoleService`] carries out every user action: it calls the [`FlightApi`], writes the
//! result into the stores and reports the outcome on the notice board. Components only
//! spawn these methods and render the stores.
//!
//! Rules shared by all operations:
//! - every failure ends up as a visible notice and is logged
//! - cached airplane/flight lists are re-read after a mutation, never patched
//! - an action already in flight for the same [`ActionKey`] is skipped
//! - nothing is retried automatically

pub mod booking;
pub mod fleet;
pub mod flight;
pub mod transfer;


use dioxus_logger::tracing;

use crate::client::{
    api::FlightApi,
    config::ClientConfig,
    error::{ApiError, TransferError},
    store::{
        ActionKey, ActivityTracker, ApiStatus, CellFamily, FleetStore, NoticeBoard, NoticeLevel,
        StateCell,
    },
    workflow::TransferWorkflow,
};

pub use flight::FlightForm;

/// How a user action ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and state was updated
    Completed,
    /// The request was sent and failed; an error notice is shown
    Failed,
    /// Client-side validation refused the action before any request; a warning is shown
    Rejected,
    /// The action was already in flight, or its result arrived for a superseded step
    Skipped,
}

/// Performs console actions against `A` using stores held in `K` cells.
pub struct ConsoleService<A, K: CellFamily> {
    api: A,
    config: ClientConfig,
    pub fleet: K::Cell<FleetStore>,
    pub notices: K::Cell<NoticeBoard>,
    pub activity: K::Cell<ActivityTracker>,
    pub transfer: K::Cell<TransferWorkflow>,
    pub status: K::Cell<ApiStatus>,
}

impl<A: Clone, K: CellFamily> Clone for ConsoleService<A, K> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            config: self.config.clone(),
            fleet: self.fleet.clone(),
            notices: self.notices.clone(),
            activity: self.activity.clone(),
            transfer: self.transfer.clone(),
            status: self.status.clone(),
        }
    }
}

impl<A: FlightApi, K: CellFamily> ConsoleService<A, K> {
    /// Creates a new instance of ConsoleService.
    ///
    /// # Arguments
    /// - `api` - Client used for every request
    /// - `config` - Client configuration
    /// - `fleet`, `notices`, `activity`, `transfer`, `status` - Store cells the service writes to
    pub fn new(
        api: A,
        config: ClientConfig,
        fleet: K::Cell<FleetStore>,
        notices: K::Cell<NoticeBoard>,
        activity: K::Cell<ActivityTracker>,
        transfer: K::Cell<TransferWorkflow>,
        status: K::Cell<ApiStatus>,
    ) -> Self {
        Self {
            api,
            config,
            fleet,
            notices,
            activity,
            transfer,
            status,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shows `message` on the notice board and logs it at the matching level.
    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();

        match level {
            NoticeLevel::Danger => tracing::error!("{}", message),
            NoticeLevel::Warning => tracing::warn!("{}", message),
            NoticeLevel::Success | NoticeLevel::Info => tracing::info!("{}", message),
        }

        self.notices.write_with(|board| board.push(level, message));
    }

    /// Reports a failed or refused API operation, prefixed with `context` when given.
    fn report_api_error(&self, context: Option<&str>, err: &ApiError) {
        let level = match err {
            ApiError::Validation(_) => NoticeLevel::Warning,
            _ => NoticeLevel::Danger,
        };

        let message = match context {
            Some(context) => format!("{}: {}", context, err),
            None => err.to_string(),
        };

        self.notify(level, message);
    }

    fn report_transfer_error(&self, err: &TransferError) {
        self.notify(NoticeLevel::Warning, err.to_string());
    }

    /// Registers `key` as running. Returns `false` if it already was.
    fn begin(&self, key: &ActionKey, label: Option<&str>) -> bool {
        let started = self
            .activity
            .write_with(|activity| activity.begin(key.clone(), label));

        if !started {
            tracing::debug!("Skipping {:?}, a request for it is already in flight", key);
        }

        started
    }

    fn finish(&self, key: &ActionKey) {
        self.activity.write_with(|activity| activity.finish(key));
    }
}
