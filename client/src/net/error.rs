//! Error type for REST calls against the marketplace API.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures carry their cause for logging only; the UI
//! shows a generic retry message for them. Business rejections carry the
//! server-provided reason, which is shown verbatim when present.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The server understood the request and refused it.
    #[error("request rejected: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { reason: Option<String> },

    /// Called outside the browser (SSR), where the API is never contacted.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether this is a business rejection rather than a transport problem.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Text to show the user: the server's reason for rejections that have
    /// one, `fallback` for everything else.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { reason: Some(reason) } if !reason.trim().is_empty() => reason.clone(),
            _ => fallback.to_owned(),
        }
    }
}
