use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    /// Wordlist path does not exist.
    #[error("wordlist not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Wordlist exists but could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line bytes are not valid under the selected encoding.
    #[error("cannot decode line {line} (byte offset {offset}) as {encoding}")]
    Decode {
        line: u64,
        offset: u64,
        encoding: &'static str,
    },

    /// Encoding label not recognised.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Caller supplied a value outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure while serialising a report.
    #[error("report error: {0}")]
    Report(String),

    /// Propagated I/O error on a stream with no associated path.
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
}

impl From<csv::Error> for MaskError {
    fn from(err: csv::Error) -> Self {
        MaskError::Report(err.to_string())
    }
}

impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> Self {
        MaskError::Report(err.to_string())
    }
}

impl MaskError {
    /// Classify an error raised while opening or reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            MaskError::NotFound { path }
        } else {
            MaskError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, MaskError>;
