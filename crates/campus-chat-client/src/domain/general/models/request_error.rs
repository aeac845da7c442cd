// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Failure of a request/response exchange with the backend.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum RequestError {
    /// The access token is missing or was rejected.
    #[error("Not authorized")]
    Unauthorized,
    #[error("Not found")]
    NotFound,
    #[error("Request was rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Network error: {msg}")]
    Network { msg: String },
    #[error("Failed to decode response: {msg}")]
    Decoding { msg: String },
}

impl RequestError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

pub trait RequestErrorExt {
    /// Returns true if the error chain contains a `RequestError::Unauthorized`.
    fn is_unauthorized(&self) -> bool;
}

impl RequestErrorExt for anyhow::Error {
    fn is_unauthorized(&self) -> bool {
        self.downcast_ref::<RequestError>()
            .map(RequestError::is_unauthorized)
            .unwrap_or(false)
    }
}
