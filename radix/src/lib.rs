//! Binary and hexadecimal views of text.
//!
//! The two views frame text differently on purpose: [`binary`] writes one
//! group per Unicode scalar value (the value of the character), [`hex`]
//! writes one pair per UTF-8 byte (the bytes on the wire). `"😀"` is one
//! 17-bit binary group but four hex pairs.

pub mod binary;
pub mod error;
pub mod hex;

use henkan::decoder::Decoder;
use henkan::diagnostic::or_diagnostic;

pub use binary::{Binary, BinaryOptions};
pub use error::Error;
pub use hex::{Hex, HexOptions};

/// ```
/// assert_eq!(radix::text_to_binary("A", 8, " ", false), "01000001");
/// ```
pub fn text_to_binary(text: &str, group_size_bits: usize, delimiter: &str, uppercase: bool) -> String {
    let options = BinaryOptions {
        group_size_bits,
        delimiter: delimiter.to_string(),
        uppercase,
    };
    Binary::encode(text, &options).to_string()
}

/// Decodes binary groups, or returns a diagnostic string.
pub fn binary_to_text(binary: &str) -> String {
    or_diagnostic("binary", Binary::new(binary).decode())
}

/// ```
/// assert_eq!(radix::text_to_hex("Hi", " ", true, 1), "48 69");
/// ```
pub fn text_to_hex(text: &str, delimiter: &str, uppercase: bool, bytes_per_group: usize) -> String {
    let options = HexOptions {
        delimiter: delimiter.to_string(),
        uppercase,
        bytes_per_group,
    };
    Hex::encode(text, &options).to_string()
}

/// Decodes hex pairs as UTF-8, or returns a diagnostic string.
pub fn hex_to_text(hex: &str) -> String {
    or_diagnostic("hex", Hex::new(hex).decode())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Hello, World!")]
    #[case("naïve café")]
    #[case("日本語テキスト")]
    #[case("mixed 😀🎉 emoji\nand newlines\t")]
    #[case("")]
    fn test_roundtrip(#[case] text: &str) {
        assert_eq!(binary_to_text(&text_to_binary(text, 8, " ", false)), text);
        assert_eq!(binary_to_text(&text_to_binary(text, 0, ",", true)), text);
        assert_eq!(hex_to_text(&text_to_hex(text, " ", true, 1)), text);
        assert_eq!(hex_to_text(&text_to_hex(text, "-", false, 3)), text);
    }

    #[test]
    fn test_byte_vs_scalar_framing() {
        assert_eq!(text_to_hex("😀", " ", true, 1).split(' ').count(), 4);
        assert_eq!(text_to_binary("😀", 8, " ", false).split(' ').count(), 1);
    }

    #[rstest]
    #[case::odd_hex(hex_to_text("ABC"), "invalid hex: odd number of digits (3)")]
    #[case::invalid_binary_digit(binary_to_text("2"), "invalid binary: no binary digits found")]
    #[case::surrogate(binary_to_text("1101100000000000"), "invalid binary: U+D800 is not a Unicode scalar value")]
    fn test_diagnostics(#[case] got: String, #[case] expected: &str) {
        assert_eq!(got, expected);
    }

    #[test]
    fn test_invalid_utf8_diagnostic() {
        assert!(hex_to_text("FF FE").starts_with("invalid hex: bytes are not valid UTF-8"));
    }
}
