use attest_core::CoreError;

/// Errors from the WHY API client.
#[derive(Debug, thiserror::Error)]
pub enum WhyApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A payload failed domain validation before being sent.
    #[error(transparent)]
    Validation(#[from] CoreError),
}
