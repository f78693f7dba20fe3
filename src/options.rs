use crate::{OmnisendError, Result};

/// Fixed connect timeout applied to every request, in seconds.
pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Configures the overall request timeout and TLS verification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Overall per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Whether to verify the server TLS certificate.
    pub verify_tls: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            verify_tls: true,
        }
    }
}

impl ClientOptions {
    /// Rejects values that would disable the request deadline entirely.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(OmnisendError::Config(
                "timeout_secs must be a positive number of seconds".to_owned(),
            ));
        }
        Ok(())
    }
}
