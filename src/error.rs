//! Error types for dependency extraction and graph emission
//!
//! Every failure is fatal for a run; the variants exist so `main` can report
//! which path was involved.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning sources or writing graphs.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a source file or writing an output file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source file is not valid UTF-8 text
    #[error("{}: stream did not contain valid UTF-8", path.display())]
    Decode { path: PathBuf },

    /// The source glob built from the scan root is malformed
    #[error("invalid source pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The tree walk hit an entry it could not read
    #[error("cannot walk source tree: {0}")]
    Walk(#[from] glob::GlobError),

    /// Serializing the dependency map failed
    #[error("cannot serialize dependency map: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an I/O error with the path it concerns.
    ///
    /// Invalid UTF-8 surfaces from `read_to_string` as `InvalidData`; that case
    /// becomes [`Error::Decode`].
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::InvalidData {
            Self::Decode { path }
        } else {
            Self::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
