/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum OmnisendError {
    /// Invalid API key, invalid options, or HTTP transport setup failure.
    /// Raised at construction only.
    #[error("configuration error: {0}")]
    Config(String),
    /// Network or request execution error from `reqwest`. Never retried.
    #[error("Couldn't send request: {0}")]
    Transport(reqwest::Error),
    /// The API answered 403.
    #[error("Forbidden. Incorrect API Key or insufficient permissions.")]
    Forbidden,
    /// The API answered 429 again after the automatic retry.
    #[error("Rate limit reached. Please try again later.")]
    RateLimited,
    /// Any other non-success status, with the upstream message when the
    /// response body was JSON carrying one.
    #[error("remote error {status}: {message}")]
    Remote {
        /// HTTP status code of the failing response.
        status: u16,
        /// Upstream error text, or `"Unknown error occurred."`.
        message: String,
        /// Names of request fields the API rejected, when reported.
        fields: Vec<String>,
    },
    /// A request body could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(String),
    /// A success response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl OmnisendError {
    /// HTTP-level status code associated with the failure.
    ///
    /// Transport failures report 500, the code the API's older SDKs attached
    /// to them. Construction and decode errors carry none.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => Some(500),
            Self::Forbidden => Some(403),
            Self::RateLimited => Some(429),
            Self::Remote { status, .. } => Some(*status),
            Self::Config(_) | Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    /// Field names the API flagged as invalid; empty for every other failure.
    pub fn fields(&self) -> &[String] {
        match self {
            Self::Remote { fields, .. } => fields,
            _ => &[],
        }
    }
}
