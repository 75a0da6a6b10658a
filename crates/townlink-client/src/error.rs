//! Error types for the client.
//!
//! Uses `thiserror` for typed errors that surface through the whole fetch
//! pipeline: transport, remote status, response decoding, and the
//! whole-fetch deadline. An unresolved key is NOT an error; it reaches the
//! caller as `None` at its position in the output.

/// Errors that can occur during a fetch.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network-level failure: connection refused, per-request timeout,
    /// TLS failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("request to {url} returned status {status}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// The request URL, which names the endpoint.
        url: String,
        /// Response body, as returned by the service.
        body: String,
        /// Index of the failing batch for bulk requests.
        batch: Option<usize>,
    },

    /// The response body was not valid JSON or did not match the
    /// endpoint's expected shape.
    #[error("malformed response from {url} at position {offset}: {reason}")]
    Decode {
        /// The request URL, which names the endpoint.
        url: String,
        /// Array position of the offending element; 0 when the body as a
        /// whole is malformed.
        offset: usize,
        /// What went wrong.
        reason: String,
    },

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The whole-fetch deadline elapsed before every batch completed.
    /// In-flight requests are cancelled; partial results are never
    /// returned.
    #[error("fetch deadline exceeded")]
    DeadlineExceeded,
}

impl ClientError {
    /// Classify a [`ClientError::Remote`] by its documented status codes.
    /// `None` for every other variant.
    pub const fn remote_kind(&self) -> Option<RemoteKind> {
        match self {
            Self::Remote { status, .. } => Some(RemoteKind::of(*status)),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// The documented failure classes for non-2xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKind {
    /// 400: the request was malformed.
    BadRequest,
    /// 404: the resource does not exist.
    NotFound,
    /// 504: the service timed out upstream.
    GatewayTimeout,
    /// Any other non-2xx status.
    Other,
}

impl RemoteKind {
    /// Classify a status code.
    pub const fn of(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            404 => Self::NotFound,
            504 => Self::GatewayTimeout,
            _ => Self::Other,
        }
    }
}
