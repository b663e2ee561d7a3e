use henkan::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors raised while transcoding Morse code.
///
/// Unknown tokens and characters are resolved by the caller's policy
/// (drop, pass through, or substitute) and only surface through tracing.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A signal token that is not in the symbol table
    #[error("unknown morse token '{0}'")]
    UnknownToken(String),

    /// A character that has no Morse signal
    #[error("no morse signal for '{0}'")]
    UnknownCharacter(char),

    /// The word-boundary pattern built from the separators was rejected
    #[error("invalid morse separator pattern: {0}")]
    Pattern(regex::Error),
}

impl Classify for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownToken(_) | Error::UnknownCharacter(_) => ErrorKind::UnknownSymbol,
            Error::Pattern(_) => ErrorKind::MalformedInput,
        }
    }
}
