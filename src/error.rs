//! Error types shared by every UniOne operation.

use thiserror::Error;

/// Error detail payload reported by the API inside an error envelope,
/// or synthesized for timeouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    /// Envelope-level status string, usually `"error"`. `"TIMEOUT"` when the
    /// call was cancelled by the configured deadline.
    pub status: String,
    /// Numeric error code from the server, `0` for synthesized details.
    pub code: i64,
    /// Human-readable message from the server, or the raw transport status
    /// text for synthesized details.
    pub message: String,
}

impl ErrorDetails {
    /// Synthetic detail for a call cancelled by the configured timeout.
    ///
    /// `status_text` is the transport's raw status line; the response body is
    /// known to be empty in this case and is never parsed.
    pub(crate) fn timeout(status_text: &str) -> Self {
        ErrorDetails {
            status: "TIMEOUT".to_string(),
            code: 0,
            message: status_text.to_string(),
        }
    }
}

/// A call that was classified as failed, carrying the transport status text
/// and the decoded (or synthesized) details when available.
///
/// `status` is the coarse outcome label: an HTTP status name such as
/// `"BadRequest"`, the timeout marker, or a transport error's display text.
/// `details` is `None` when the response body was empty, which is the case
/// for all transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API call failed with status {status:?}")]
pub struct ApiError {
    pub status: String,
    pub details: Option<ErrorDetails>,
}

impl ApiError {
    /// True when this error was synthesized from the request deadline.
    pub fn is_timeout(&self) -> bool {
        self.details
            .as_ref()
            .is_some_and(|d| d.status == "TIMEOUT")
    }

    /// Server-reported error code, if the error envelope carried one.
    pub fn code(&self) -> Option<i64> {
        self.details.as_ref().map(|d| d.code)
    }
}

/// Errors returned by UniOne operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Client construction or configuration is invalid (missing API key,
    /// unparseable server address, key not representable as a header value).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A request payload failed to serialize.
    #[error("failed to serialize request payload")]
    Json(#[from] serde_json::Error),

    /// The API (or the transport, reported through the outcome) classified
    /// the call as failed.
    #[error(transparent)]
    Api(ApiError),

    /// A response classified as successful (or a non-empty error body) did
    /// not decode into the expected shape. Distinct from [`Error::Api`]: the
    /// remote side did not report a structured failure, it sent something
    /// this client cannot read.
    #[error("malformed API response: {reason}")]
    MalformedResponse {
        reason: String,
        /// Leading fragment of the offending body, for diagnostics.
        snippet: String,
    },

    /// A recipient address failed validation before any request was sent.
    #[error("{address:?} is not a valid email address")]
    InvalidEmailAddress { address: String },
}

impl Error {
    /// The classified API failure, if that is what this error is.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}
