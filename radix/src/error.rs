use std::string::FromUtf8Error;

use henkan::error::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // Binary errors
    #[error("invalid binary: no binary digits found")]
    NoBinaryDigits,
    #[error("invalid binary: '{0}' does not fit in 32 bits")]
    BinaryOverflow(String),
    #[error("invalid binary: U+{0:X} is not a Unicode scalar value")]
    InvalidScalar(u32),

    // Hex errors
    #[error("invalid hex: odd number of digits ({0})")]
    OddHexLength(usize),
    #[error("invalid hex: bytes are not valid UTF-8 ({0})")]
    InvalidUtf8(FromUtf8Error),
}

impl Classify for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::NoBinaryDigits | Error::BinaryOverflow(_) | Error::OddHexLength(_) => {
                ErrorKind::MalformedInput
            }
            Error::InvalidScalar(_) | Error::InvalidUtf8(_) => ErrorKind::InvalidDecodedBytes,
        }
    }
}
