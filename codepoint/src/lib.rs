//! Unicode code point inspector.
//!
//! Walks text by scalar value, so a character outside the Basic Multilingual
//! Plane yields one record, not two surrogate halves.

use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodepointRecord {
    pub character: char,
    pub codepoint: u32,
    /// `U+` and at least four uppercase hex digits, e.g. `U+0041`, `U+1F600`.
    pub hex_label: String,
}

impl CodepointRecord {
    pub fn new(character: char) -> Self {
        let codepoint = u32::from(character);
        CodepointRecord {
            character,
            codepoint,
            hex_label: format!("U+{codepoint:04X}"),
        }
    }
}

impl Display for CodepointRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Debug quoting keeps control characters and whitespace visible
        write!(f, "{:?} {} {}", self.character, self.codepoint, self.hex_label)
    }
}

/// Lazily yields one record per scalar value of `text`, in order.
pub fn inspect(text: &str) -> impl Iterator<Item = CodepointRecord> + '_ {
    text.chars().map(CodepointRecord::new)
}

/// ```
/// let records = codepoint::inspect_unicode("😀");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].hex_label, "U+1F600");
/// ```
pub fn inspect_unicode(text: &str) -> Vec<CodepointRecord> {
    inspect(text).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii('A', 65, "U+0041")]
    #[case::control('\n', 10, "U+000A")]
    #[case::latin1('é', 233, "U+00E9")]
    #[case::bmp('語', 35486, "U+8A9E")]
    #[case::astral('😀', 128512, "U+1F600")]
    #[case::max('\u{10FFFF}', 0x10FFFF, "U+10FFFF")]
    fn test_record(#[case] c: char, #[case] codepoint: u32, #[case] hex_label: &str) {
        let record = CodepointRecord::new(c);
        assert_eq!(record.character, c);
        assert_eq!(record.codepoint, codepoint);
        assert_eq!(record.hex_label, hex_label);
    }

    #[test]
    fn test_astral_yields_one_record() {
        let records = inspect_unicode("😀");
        assert_eq!(
            records,
            vec![CodepointRecord {
                character: '😀',
                codepoint: 128512,
                hex_label: "U+1F600".to_string(),
            }]
        );
    }

    #[test]
    fn test_order_and_combining_marks() {
        // 'e' followed by a combining acute accent is two scalar values
        let labels = inspect("ae\u{0301}😀")
            .map(|r| r.hex_label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["U+0061", "U+0065", "U+0301", "U+1F600"]);
    }

    #[test]
    fn test_empty() {
        assert!(inspect_unicode("").is_empty());
    }

    #[rstest]
    #[case('A', "'A' 65 U+0041")]
    #[case('\t', "'\\t' 9 U+0009")]
    fn test_display(#[case] c: char, #[case] expected: &str) {
        assert_eq!(CodepointRecord::new(c).to_string(), expected);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&CodepointRecord::new('A')).unwrap();
        assert_eq!(json, r#"{"character":"A","codepoint":65,"hex_label":"U+0041"}"#);
    }
}
