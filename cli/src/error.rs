use henkan::error::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Decode failures print the same diagnostic text the string API returns.
    #[error("{0}")]
    Morse(#[from] morse::Error),

    #[error("{0}")]
    Radix(#[from] radix::Error),

    #[error("{0}")]
    Base64(#[from] b64::Error),

    #[error("{0}")]
    Percent(#[from] percent::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// The decode failure class, or `None` for I/O and serialization errors.
    pub(crate) fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Morse(e) => Some(e.kind()),
            Error::Radix(e) => Some(e.kind()),
            Error::Base64(e) => Some(e.kind()),
            Error::Percent(e) => Some(e.kind()),
            _ => None,
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
