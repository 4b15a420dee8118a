use crate::client::error::ConfigError;

const API_BASE_URL_VAR: &str = "FLIGHTDESK_API_BASE_URL";
const NOTICE_TIMEOUT_VAR: &str = "FLIGHTDESK_NOTICE_TIMEOUT_MS";

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5000;

/// Client configuration, baked in at compile time since the browser has no process environment.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path, without a trailing slash
    pub api_base_url: String,
    /// How long a notice stays on screen before it is dismissed
    pub notice_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FLIGHTDESK_API_BASE_URL"),
            option_env!("FLIGHTDESK_NOTICE_TIMEOUT_MS"),
        )
    }

    /// Builds the config from raw variable values, `None` meaning the variable was not set.
    pub fn from_values(
        api_base_url: Option<&str>,
        notice_timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = match api_base_url {
            Some(value) => {
                let trimmed = value.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::InvalidEnvValue {
                        var: API_BASE_URL_VAR.to_string(),
                        reason: "must not be empty".to_string(),
                    });
                }
                trimmed.to_string()
            }
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let notice_timeout_ms = match notice_timeout_ms {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: NOTICE_TIMEOUT_VAR.to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: NOTICE_TIMEOUT_VAR.to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_NOTICE_TIMEOUT_MS,
        };

        Ok(Self {
            api_base_url,
            notice_timeout_ms,
        })
    }
}
