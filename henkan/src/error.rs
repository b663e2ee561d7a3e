//! Error taxonomy shared by all transcoders.

use std::fmt::{Display, Formatter};

/// The class of a decode failure.
///
/// Every format crate keeps its own `Error` enum with precise variants and
/// maps each variant onto one of these kinds through [`Classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong alphabet, odd-length hex, bad percent-escape, bad Base64 padding.
    MalformedInput,
    /// Structurally valid encoding whose bytes are not valid UTF-8, or whose
    /// numeral is not a Unicode scalar value.
    InvalidDecodedBytes,
    /// A Morse token or character absent from the symbol table.
    UnknownSymbol,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::MalformedInput => write!(f, "malformed input"),
            ErrorKind::InvalidDecodedBytes => write!(f, "invalid decoded bytes"),
            ErrorKind::UnknownSymbol => write!(f, "unknown symbol"),
        }
    }
}

/// Maps a crate-specific error onto the shared [`ErrorKind`] taxonomy.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}
