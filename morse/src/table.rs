//! The Morse symbol table and its inverse.
//!
//! Both directions are built once, on first use, and are read-only for the
//! rest of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Character to signal, ITU alphabet plus common punctuation.
///
/// `!` (`-.-.--`) is not part of the set; inputs containing it decode as an
/// unknown token.
const SYMBOLS: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static FORWARD: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| SYMBOLS.iter().copied().collect());

static INVERSE: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| SYMBOLS.iter().map(|&(c, signal)| (signal, c)).collect());

/// Signal for an uppercase character.
pub fn signal_for(c: char) -> Option<&'static str> {
    FORWARD.get(&c).copied()
}

/// Character for a signal made of `.` and `-`.
pub fn char_for(signal: &str) -> Option<char> {
    INVERSE.get(signal).copied()
}

/// All table entries in alphabet order: letters, digits, punctuation.
pub fn entries() -> impl Iterator<Item = (char, &'static str)> {
    SYMBOLS.iter().copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[test]
    fn test_table_is_injective() {
        let signals: HashSet<&str> = entries().map(|(_, s)| s).collect();
        assert_eq!(signals.len(), SYMBOLS.len());
        assert_eq!(INVERSE.len(), FORWARD.len());
    }

    #[test]
    fn test_signals_use_only_dots_and_dashes() {
        for (c, signal) in entries() {
            assert!(
                !signal.is_empty() && signal.chars().all(|s| s == '.' || s == '-'),
                "bad signal for {c:?}: {signal:?}"
            );
        }
    }

    #[rstest]
    #[case('A', Some(".-"))]
    #[case('0', Some("-----"))]
    #[case('@', Some(".--.-."))]
    #[case('a', None)]
    #[case('!', None)]
    fn test_signal_for(#[case] c: char, #[case] expected: Option<&str>) {
        assert_eq!(signal_for(c), expected);
    }

    #[rstest]
    #[case("...", Some('S'))]
    #[case("-.-.-.", Some(';'))]
    #[case("-.-.--", None)]
    #[case("", None)]
    fn test_char_for(#[case] signal: &str, #[case] expected: Option<char>) {
        assert_eq!(char_for(signal), expected);
    }
}
