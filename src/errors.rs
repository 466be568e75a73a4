use std::time::Duration;
use thiserror::Error;

/// Defines errors that can occur while fetching and decoding JSON.
///
/// # Example: Handling a Failed Lookup
///
/// ```ignore
/// match client.country("atlantis").await {
///     Err(FetchError::Status { status_code: 404, label }) => {
///         tracing::warn!("{label}: nothing matched");
///     }
///     Err(err) if err.is_transport() => {
///         tracing::error!("Network problem: {err}");
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request never produced a response (DNS failure, refused
    /// connection, TLS error, client-level timeout).
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    ///
    /// The display form is `"{label} ({status_code})"`, e.g.
    /// `"Country not found (404)"`.
    #[error("{label} ({status_code})")]
    Status {
        /// Caller-supplied description of what failed
        label: String,
        /// HTTP status code (e.g., 404, 500)
        status_code: u16,
    },
    /// The body of a successful response was not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// A successful response did not contain the entity the caller needed.
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A deadline raced against the request elapsed first.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Every candidate passed to [`first_success`](crate::first_success) failed.
    ///
    /// The errors are listed in input order.
    #[error("All {} requests failed", .errors.len())]
    AllFailed { errors: Vec<FetchError> },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Failed to build the HTTP client.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl FetchError {
    /// Returns the HTTP status code if the server answered with a failure status.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns `true` if the failure happened before any response arrived.
    ///
    /// ```rust
    /// use countries_rs::FetchError;
    ///
    /// let not_found = FetchError::Status {
    ///     label: "Country not found".to_string(),
    ///     status_code: 404,
    /// };
    /// assert!(!not_found.is_transport());
    /// assert_eq!(not_found.status_code(), Some(404));
    /// ```
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Http(_))
    }
}
