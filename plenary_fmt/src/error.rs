use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl FormatError {
    /// True when the consumer of stdout went away mid-run.
    pub fn is_downstream_closed(&self) -> bool {
        matches!(self, Self::Write(err) if err.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
