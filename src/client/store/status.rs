use crate::model::api::StatusDto;

/// Last known health of the remote API.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Online(StatusDto),
    Offline(String),
}

impl ApiStatus {
    pub fn from_status(status: StatusDto) -> Self {
        if status.is_ok() {
            ApiStatus::Online(status)
        } else {
            let reason = status
                .database
                .clone()
                .unwrap_or_else(|| status.status.clone());
            ApiStatus::Offline(format!("API reports {}", reason))
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, ApiStatus::Online(_))
    }
}
