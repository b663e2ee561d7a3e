pub mod error;

use std::fmt::{Display, Formatter};

use base64::{Engine, engine::general_purpose::STANDARD};
use henkan::decoder::{DecodableFrom, Decoder};
use henkan::diagnostic::or_diagnostic;
use henkan::encoder::{EncodableTo, Encoder};

pub use error::Error;

/*
ref: https://www.rfc-editor.org/rfc/rfc4648.html#section-4
*/

/// Standard-alphabet Base64 text with `=` padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64(String);

impl Base64 {
    pub fn new(data: impl Into<String>) -> Self {
        Base64(data.into())
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Base64(STANDARD.encode(data))
    }

    pub fn data(&self) -> &str {
        &self.0
    }

    /// The encoded text broken into lines of at most `width` characters.
    ///
    /// A width of 0 returns the text unwrapped.
    pub fn wrapped(&self, width: usize) -> String {
        if width == 0 {
            return self.0.clone();
        }
        // the alphabet is ASCII, so byte chunks are character chunks
        self.0
            .as_bytes()
            .chunks(width)
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Display for Base64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> EncodableTo<&'a str> for Base64 {}

impl<'a> Encoder<&'a str, Base64> for &'a str {
    type Error = Error;

    fn encode(&self) -> Result<Base64, Self::Error> {
        Ok(Base64::from_bytes(self.as_bytes()))
    }
}

impl DecodableFrom<Base64> for Vec<u8> {}

impl Decoder<Base64, Vec<u8>> for Base64 {
    type Error = Error;

    /// ASCII whitespace is ignored, so wrapped text decodes as one block.
    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        let compact = self
            .0
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect::<String>();
        STANDARD.decode(compact).map_err(Error::Base64Decode)
    }
}

impl DecodableFrom<Base64> for String {}

impl Decoder<Base64, String> for Base64 {
    type Error = Error;

    fn decode(&self) -> Result<String, Self::Error> {
        let bytes = <Base64 as Decoder<Base64, Vec<u8>>>::decode(self)?;
        String::from_utf8(bytes).map_err(Error::InvalidUtf8)
    }
}

/// ```
/// assert_eq!(b64::text_to_base64("Hello"), "SGVsbG8=");
/// ```
pub fn text_to_base64(text: &str) -> String {
    let encoded: Result<Base64, Error> = text.encode();
    encoded.map_or_else(|e| e.to_string(), |b| b.to_string())
}

/// Decodes Base64 to UTF-8 text, or returns a diagnostic string.
pub fn base64_to_text(base64: &str) -> String {
    or_diagnostic("base64", Base64::new(base64).decode())
}

#[cfg(test)]
mod tests {
    use base64::DecodeError;
    use henkan::error::{Classify, ErrorKind};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::hello("Hello", "SGVsbG8=")]
    #[case::two_pad("Hi", "SGk=")]
    #[case::no_pad("Man", "TWFu")]
    #[case::utf8("é😀", "w6nwn5iA")]
    #[case::empty("", "")]
    fn test_text_to_base64(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(text_to_base64(text), expected);
    }

    #[rstest]
    #[case::padded("SGVsbG8=", "Hello")]
    #[case::wrapped("SGVs\nbG8=\n", "Hello")]
    #[case::surrounding_space("  TWFu  ", "Man")]
    #[case::empty("", "")]
    fn test_base64_to_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(base64_to_text(input), expected);
    }

    #[test]
    fn test_decode_with_bad_alphabet() {
        let result: Result<String, Error> = Base64::new("SGV*bG8=").decode();
        assert_eq!(
            result,
            Err(Error::Base64Decode(DecodeError::InvalidByte(3, b'*')))
        );
    }

    #[rstest]
    #[case::bad_alphabet("SGV*bG8=")]
    #[case::missing_padding("SGVsbG8")]
    #[case::dangling_symbol("SGVsb")]
    #[case::padding_in_the_middle("SG=sbG8=")]
    fn test_decode_with_malformed_input(#[case] input: &str) {
        let result: Result<String, Error> = Base64::new(input).decode();
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(base64_to_text(input).starts_with("invalid base64: "));
    }

    #[test]
    fn test_decode_with_invalid_utf8() {
        // 0xFF 0xFE
        let result: Result<String, Error> = Base64::new("//4=").decode();
        assert!(matches!(result, Err(Error::InvalidUtf8(_))));
        assert!(base64_to_text("//4=").starts_with("invalid base64: decoded bytes"));
    }

    #[test]
    fn test_bytes_decoder() {
        let bytes: Vec<u8> = Base64::new("//4=").decode().unwrap();
        assert_eq!(bytes, vec![0xff, 0xfe]);
    }

    #[rstest]
    #[case(4, "SGVs\nbG8g\nV29y\nbGQ=")]
    #[case(0, "SGVsbG8gV29ybGQ=")]
    #[case(64, "SGVsbG8gV29ybGQ=")]
    fn test_wrapped(#[case] width: usize, #[case] expected: &str) {
        let encoded: Base64 = "Hello World".encode().unwrap();
        assert_eq!(encoded.wrapped(width), expected);
    }

    #[rstest]
    #[case("plain ascii")]
    #[case("ünïcödé ✓ 😀")]
    #[case("line\nbreaks\r\n")]
    fn test_roundtrip(#[case] text: &str) {
        assert_eq!(base64_to_text(&text_to_base64(text)), text);
    }
}
