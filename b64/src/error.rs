use std::string::FromUtf8Error;

use base64::DecodeError;
use henkan::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur when decoding Base64 text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid alphabet character, bad length, or bad padding
    #[error("invalid base64: {0}")]
    Base64Decode(DecodeError),

    /// The decoded bytes are not UTF-8 text
    #[error("invalid base64: decoded bytes are not valid UTF-8 ({0})")]
    InvalidUtf8(FromUtf8Error),
}

impl Classify for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Base64Decode(_) => ErrorKind::MalformedInput,
            Error::InvalidUtf8(_) => ErrorKind::InvalidDecodedBytes,
        }
    }
}
