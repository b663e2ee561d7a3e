//! Collapsing typed results into the single-string contract.
//!
//! Callers of the string layer always receive one `String`: the decoded
//! text on success, or the error's `Display` text (the diagnostic) on
//! failure. Nothing escapes as a panic.

use std::fmt::Display;

use tracing::debug;

use crate::error::Classify;

/// Returns the decoded text, or the diagnostic string for `err`.
///
/// `format` names the transcoder in the emitted `debug!` event.
pub fn or_diagnostic<E>(format: &str, result: Result<String, E>) -> String
where
    E: Display + Classify,
{
    match result {
        Ok(text) => text,
        Err(err) => {
            debug!(transcoder = format, kind = %err.kind(), "decode rejected: {err}");
            err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::or_diagnostic;
    use crate::error::{Classify, ErrorKind};

    #[derive(Debug)]
    struct OddLength;

    impl std::fmt::Display for OddLength {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "invalid hex: odd number of digits")
        }
    }

    impl Classify for OddLength {
        fn kind(&self) -> ErrorKind {
            ErrorKind::MalformedInput
        }
    }

    #[rstest]
    #[case::ok(Ok("Hi".to_string()), "Hi")]
    #[case::err(Err(OddLength), "invalid hex: odd number of digits")]
    fn test_or_diagnostic(#[case] input: Result<String, OddLength>, #[case] expected: &str) {
        assert_eq!(or_diagnostic("hex", input), expected);
    }

    #[rstest]
    #[case(ErrorKind::MalformedInput, "malformed input")]
    #[case(ErrorKind::InvalidDecodedBytes, "invalid decoded bytes")]
    #[case(ErrorKind::UnknownSymbol, "unknown symbol")]
    fn test_error_kind_display(#[case] kind: ErrorKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
