use std::string::FromUtf8Error;

use henkan::error::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// `%` not followed by two hex digits
    #[error("invalid percent-encoding: malformed escape '{escape}' at byte {position}")]
    MalformedEscape { position: usize, escape: String },

    #[error("invalid percent-encoding: decoded bytes are not valid UTF-8 ({0})")]
    InvalidUtf8(FromUtf8Error),
}

impl Classify for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedEscape { .. } => ErrorKind::MalformedInput,
            Error::InvalidUtf8(_) => ErrorKind::InvalidDecodedBytes,
        }
    }
}
