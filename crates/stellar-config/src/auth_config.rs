use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LEN, DEFAULT_RESET_LATENCY_MS,
    DEFAULT_SIMULATED_LATENCY_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Knobs for the simulated authentication backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Minimum accepted password length for login and registration.
    pub min_password_len: usize,
    /// Artificial round-trip latency for login/register/provider login.
    pub simulated_latency_ms: u64,
    /// Artificial latency for the password-reset email flow.
    pub reset_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            reset_latency_ms: DEFAULT_RESET_LATENCY_MS,
        }
    }
}

impl AuthConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn reset_latency(&self) -> Duration {
        Duration::from_millis(self.reset_latency_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_len == 0 {
            return Err(ConfigError::auth("auth.min_password_len must be at least 1"));
        }
        Ok(())
    }
}
