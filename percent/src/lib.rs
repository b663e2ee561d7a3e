//! Percent-encoding of UTF-8 text for use in URL components.
//!
//! Bytes outside the unreserved set `A-Z a-z 0-9 - _ . ~ ! * ' ( )` become
//! `%XX` with uppercase hex digits. Decoding leaves `+` alone; it is not an
//! encoded space in this scheme.

pub mod error;

use std::fmt::{Display, Formatter};

use henkan::decoder::{DecodableFrom, Decoder};
use henkan::diagnostic::or_diagnostic;
use henkan::encoder::{EncodableTo, Encoder};

pub use error::Error;

const UNRESERVED_MARKS: &[u8] = b"-_.~!*'()";

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&b)
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

/// Percent-encoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Percent(String);

impl Percent {
    pub fn new(encoded: impl Into<String>) -> Self {
        Percent(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> EncodableTo<&'a str> for Percent {}

impl<'a> Encoder<&'a str, Percent> for &'a str {
    type Error = Error;

    fn encode(&self) -> Result<Percent, Self::Error> {
        let mut encoded = String::with_capacity(self.len());
        for &b in self.as_bytes() {
            if is_unreserved(b) {
                encoded.push(b as char);
            } else {
                encoded.push_str(&format!("%{b:02X}"));
            }
        }
        Ok(Percent(encoded))
    }
}

impl DecodableFrom<Percent> for String {}

impl Decoder<Percent, String> for Percent {
    type Error = Error;

    fn decode(&self) -> Result<String, Self::Error> {
        let input = self.0.as_bytes();
        let mut bytes = Vec::with_capacity(input.len());
        let mut i = 0;
        while i < input.len() {
            if input[i] != b'%' {
                bytes.push(input[i]);
                i += 1;
                continue;
            }
            let byte = input
                .get(i + 1..i + 3)
                .and_then(|pair| Some((hex_value(pair[0])? << 4) | hex_value(pair[1])?));
            match byte {
                Some(b) => {
                    bytes.push(b);
                    i += 3;
                }
                None => {
                    return Err(Error::MalformedEscape {
                        position: i,
                        escape: self.0[i..].chars().take(3).collect(),
                    });
                }
            }
        }
        String::from_utf8(bytes).map_err(Error::InvalidUtf8)
    }
}

/// ```
/// assert_eq!(percent::url_encode("hello world"), "hello%20world");
/// ```
pub fn url_encode(text: &str) -> String {
    let encoded: Result<Percent, Error> = text.encode();
    encoded.map_or_else(|e| e.to_string(), |p| p.to_string())
}

/// Decodes percent escapes as UTF-8, or returns a diagnostic string.
pub fn url_decode(encoded: &str) -> String {
    or_diagnostic("url", Percent::new(encoded).decode())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::space("hello world", "hello%20world")]
    #[case::reserved("a+b=c&d/e?f#g", "a%2Bb%3Dc%26d%2Fe%3Ff%23g")]
    #[case::unreserved_marks("-_.~!*'()", "-_.~!*'()")]
    #[case::utf8("é", "%C3%A9")]
    #[case::emoji("😀", "%F0%9F%98%80")]
    #[case::percent_sign("100%", "100%25")]
    #[case::empty("", "")]
    fn test_url_encode(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(url_encode(text), expected);
    }

    #[rstest]
    #[case::space("hello%20world", "hello world")]
    #[case::lowercase_hex("%c3%a9", "é")]
    #[case::plus_is_literal("a+b", "a+b")]
    #[case::unescaped_utf8("café%21", "café!")]
    #[case::empty("", "")]
    fn test_url_decode(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(url_decode(input), expected);
    }

    #[rstest]
    #[case::trailing_percent("100%", 3, "%")]
    #[case::truncated("%E0%A4%A", 6, "%A")]
    #[case::not_hex("%zz", 0, "%zz")]
    #[case::before_multibyte("%é", 0, "%é")]
    fn test_decode_with_malformed_escape(
        #[case] input: &str,
        #[case] position: usize,
        #[case] escape: &str,
    ) {
        let result: Result<String, Error> = Percent::new(input).decode();
        assert_eq!(
            result,
            Err(Error::MalformedEscape {
                position,
                escape: escape.to_string()
            })
        );
    }

    #[test]
    fn test_decode_with_invalid_utf8() {
        let result: Result<String, Error> = Percent::new("%FF").decode();
        assert!(matches!(result, Err(Error::InvalidUtf8(_))));
        assert!(url_decode("%FF").starts_with("invalid percent-encoding: decoded bytes"));
    }

    #[rstest]
    #[case("https://example.com/path?q=rust lang&x=1")]
    #[case("ünïcödé ✓ 😀")]
    #[case("50% off (today)!")]
    fn test_roundtrip(#[case] text: &str) {
        assert_eq!(url_decode(&url_encode(text)), text);
    }
}
