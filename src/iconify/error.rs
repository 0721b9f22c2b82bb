//! Error taxonomy for the Iconify client.
//!
//! Everything here is `Clone` so a failed fetch can sit inside a
//! [`FetchStatus`](crate::interactive::ui::snapshot::FetchStatus) snapshot.

use thiserror::Error;

/// A malformed icon identifier. Raised locally and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid icon ID: \"{id}\". Expected format \"prefix:name\".")]
pub struct ValidationError {
    pub id: String,
}

impl ValidationError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Anything that went wrong between sending a request and reading its body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("Iconify API error: {status}")]
    Status { status: u16 },

    #[error("Failed to fetch icon \"{id}\": {status}")]
    Icon { id: String, status: u16 },

    #[error("Iconify request failed: {details}")]
    Transport { details: String },

    #[error("Iconify response could not be decoded: {details}")]
    Decode { details: String },
}

impl RemoteError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status } | RemoteError::Icon { status, .. } => Some(*status),
            RemoteError::Transport { .. } | RemoteError::Decode { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Validation(_) => None,
            Error::Remote(remote) => remote.status(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
