//! Error types for the API client.

/// Broad category of a failed request, for callers that only need to branch
/// on what went wrong rather than inspect the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Could not reach the server or read its reply.
    Transport,
    /// The server replied with a non-success status.
    Status,
    /// The body was not the expected JSON shape.
    Malformed,
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built.
    #[error("Invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },
    /// The API returned a non-success status with a body snippet.
    #[error("Request to {url} failed with status {status}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },
    /// The response body could not be parsed.
    #[error("Malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } | Self::RequestFailed { .. } => ErrorKind::Transport,
            Self::HttpStatus { .. } => ErrorKind::Status,
            Self::Malformed { .. } => ErrorKind::Malformed,
        }
    }

    /// The URL the failed request was aimed at.
    pub fn url(&self) -> Option<&str> {
        let url = match self {
            Self::InvalidUrl { url, .. }
            | Self::RequestFailed { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::Malformed { url, .. } => url,
        };
        if url.is_empty() {
            None
        } else {
            Some(url.as_str())
        }
    }

    /// True for a 404, which the API also uses for "no characters match".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }
}
