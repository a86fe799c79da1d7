use std::io::{self, ErrorKind};

use thiserror::Error;

/// Why the input file could not be read.
///
/// The variants are checked in declaration order; anything that is neither
/// a missing path nor a permission problem falls into [`ReadError::Io`].
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("file not found: {0}")]
    NotFound(#[source] io::Error),

    #[error("permission denied: {0}")]
    PermissionDenied(#[source] io::Error),

    #[error(transparent)]
    Io(io::Error),
}

impl ReadError {
    pub fn from_io(err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound | ErrorKind::NotADirectory => ReadError::NotFound(err),
            ErrorKind::PermissionDenied => ReadError::PermissionDenied(err),
            _ => ReadError::Io(err),
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        Self::from_io(err)
    }
}
