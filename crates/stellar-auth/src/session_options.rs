use std::time::Duration;

/// Tuning for the simulated backend. Usually sourced from the `[auth]`
/// config section by the composition root.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Minimum accepted password length for login and registration.
    pub min_password_len: usize,
    /// Artificial round-trip latency for login/register/provider login.
    pub simulated_latency: Duration,
    /// Artificial latency for the password-reset email flow.
    pub reset_latency: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            min_password_len: 6,
            simulated_latency: Duration::from_millis(800),
            reset_latency: Duration::from_millis(1500),
        }
    }
}
