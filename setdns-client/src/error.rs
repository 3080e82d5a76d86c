use thiserror::Error;

/// Unified error type for Technitium API calls.
///
/// # Transient Errors
///
/// [`Network`](Self::Network) and [`Timeout`](Self::Timeout) represent
/// transport-level failures that might succeed on a later attempt. The
/// client does not retry them; transient or not, the caller decides how
/// to proceed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure of the target
    /// server, connection refused, broken connection mid-response, etc.).
    #[error("network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-200 status code.
    ///
    /// Technitium reports operation failures (bad token, unknown zone,
    /// malformed record data) this way; the body usually contains a JSON
    /// document with an `errorMessage` field.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
