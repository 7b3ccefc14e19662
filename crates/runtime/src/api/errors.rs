//! Error types surfaced by the runtime API.
//!
//! Every [`GameService`](super::GameService) call fails with a
//! [`ServiceError`]. The runtime never escalates these: a failed call ends the
//! current tick and the next tick starts from a fresh snapshot. Only assembly
//! of the runtime itself can fail with a [`RuntimeError`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Returns true if the server understood the request and refused it.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ServiceError::Rejected { .. })
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a game service to be configured before building")]
    MissingService,
}
