//! Shim-level error type.
//!
//! Almost everything gitsl reports to the user is an exit code plus text on
//! stderr, mirroring git. `GitslError` only covers failures of the shim
//! itself, the dominant case being "could not spawn `sl`".

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitslError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Error reading message file '{path}': {source}")]
    MessageFileError { path: String, source: io::Error },
}
