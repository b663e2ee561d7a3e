//! Normalization and segmentation of free-form Morse input.
//!
//! Real-world Morse arrives with typographic dashes, bullets, invisible
//! characters and mixed word-divider conventions. Input is first folded
//! onto the two signal characters, then split into words, then letters.

use regex::Regex;

use crate::error::Error;

/// Conventional word divider, accepted whatever the configured separator.
const SLASH_DIVIDER: &str = r"\s*/\s*";
/// A run of three or more whitespace characters also ends a word.
const LONG_GAP: &str = r"\s{3,}";

/// Folds look-alike dash and dot characters onto `-` and `.`, drops
/// zero-width characters, and trims surrounding whitespace.
pub(crate) fn normalize(code: &str) -> String {
    code.chars()
        .filter_map(|c| match c {
            // figure dash, en dash, em dash, horizontal bar, minus sign,
            // hyphen, non-breaking hyphen, small and fullwidth hyphen-minus
            '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' | '\u{2010}'
            | '\u{2011}' | '\u{FE63}' | '\u{FF0D}' => Some('-'),
            // middle dot, bullet, one dot leader, bullet operator, dot operator,
            // black circle, katakana middle dot, fullwidth full stop
            '\u{00B7}' | '\u{2022}' | '\u{2024}' | '\u{2219}' | '\u{22C5}' | '\u{25CF}'
            | '\u{30FB}' | '\u{FF0E}' => Some('.'),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' => None,
            c => Some(c),
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Builds the combined word-boundary pattern.
///
/// Alternatives are tried left to right: the configured separator as a
/// literal, a slash with optional padding, then a long whitespace gap.
pub(crate) fn word_boundary(word_separator: &str) -> Result<Regex, Error> {
    let mut alternatives = Vec::with_capacity(3);
    if !word_separator.is_empty() {
        alternatives.push(regex::escape(word_separator));
    }
    alternatives.push(SLASH_DIVIDER.to_string());
    alternatives.push(LONG_GAP.to_string());
    Regex::new(&alternatives.join("|")).map_err(Error::Pattern)
}

/// Splits normalized code into words, each a list of letter tokens.
///
/// Word splitting always runs first, so a letter separator contained in the
/// word separator never breaks a word divider apart. An empty word between
/// two dividers is kept; an empty word before the first or after the last
/// divider is dropped. Empty tokens are skipped.
pub(crate) fn tokenize<'a>(
    code: &'a str,
    letter_separator: &str,
    boundary: &Regex,
) -> Vec<Vec<&'a str>> {
    let mut words = boundary.split(code).map(str::trim).collect::<Vec<_>>();
    if words.first().is_some_and(|word| word.is_empty()) {
        words.remove(0);
    }
    if words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
        .into_iter()
        .map(|word| {
            let letters: Vec<&'a str> = if letter_separator.is_empty() {
                word.split_whitespace().collect()
            } else {
                word.split(letter_separator).collect()
            };
            letters
                .into_iter()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect()
        })
        .collect()
}
