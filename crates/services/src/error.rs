//! Shared error types for the services crate.

use std::io;

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no phrases available for session")]
    Empty,
    #[error("input closed before the session finished")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
