//! Morse code transcoder.
//!
//! Encoding case-folds text to uppercase and maps every character through
//! the [`table`]. Decoding accepts messy real-world input: typographic
//! dashes and dots, zero-width characters, and any mix of the configured
//! word separator, `/`, and long whitespace gaps as word dividers.

pub mod error;
pub mod table;
mod tokenizer;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use henkan::decoder::{DecodableFrom, Decoder};
use henkan::diagnostic::or_diagnostic;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub use error::Error;

/// Emitted in strict mode for every token the table does not know.
pub const UNKNOWN_PLACEHOLDER: char = '\u{FFFD}';

/// Separators and unknown-symbol policy for one encode or decode call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorseOptions {
    pub letter_separator: String,
    pub word_separator: String,
    /// Encode: pass characters without a signal through verbatim instead of dropping them.
    pub keep_unknown: bool,
    /// Decode: emit [`UNKNOWN_PLACEHOLDER`] for unknown tokens instead of dropping them.
    pub strict: bool,
}

impl Default for MorseOptions {
    fn default() -> Self {
        MorseOptions {
            letter_separator: " ".to_string(),
            word_separator: " / ".to_string(),
            keep_unknown: false,
            strict: false,
        }
    }
}

/// Morse code text together with the separators it was written with.
#[derive(Debug, Clone)]
pub struct Morse {
    code: String,
    options: MorseOptions,
}

impl Morse {
    pub fn new(code: impl Into<String>, options: MorseOptions) -> Self {
        Morse {
            code: code.into(),
            options,
        }
    }

    /// Encodes `text`. Input is split into words on literal spaces only.
    pub fn encode(text: &str, options: &MorseOptions) -> Self {
        let code = text
            .to_uppercase()
            .split(' ')
            .map(|word| {
                word.chars()
                    .filter_map(|c| encode_char(c, options.keep_unknown))
                    .collect::<Vec<_>>()
                    .join(options.letter_separator.as_str())
            })
            .collect::<Vec<_>>()
            .join(options.word_separator.as_str());
        Morse {
            code,
            options: options.clone(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn options(&self) -> &MorseOptions {
        &self.options
    }
}

fn encode_char(c: char, keep_unknown: bool) -> Option<Cow<'static, str>> {
    match table::signal_for(c).ok_or(Error::UnknownCharacter(c)) {
        Ok(signal) => Some(Cow::Borrowed(signal)),
        Err(_) if keep_unknown => Some(Cow::Owned(c.to_string())),
        Err(e) => {
            trace!("dropping: {e}");
            None
        }
    }
}

fn decode_token(token: &str, strict: bool) -> Option<char> {
    match table::char_for(token).ok_or_else(|| Error::UnknownToken(token.to_string())) {
        Ok(c) => Some(c),
        Err(e) => {
            trace!(strict = strict, "{e}");
            strict.then_some(UNKNOWN_PLACEHOLDER)
        }
    }
}

impl Display for Morse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl DecodableFrom<Morse> for String {}

impl Decoder<Morse, String> for Morse {
    type Error = Error;

    /// Decodes to uppercase text with words joined by a single space.
    fn decode(&self) -> Result<String, Self::Error> {
        let code = tokenizer::normalize(&self.code);
        if code.is_empty() {
            return Ok(String::new());
        }
        let boundary = tokenizer::word_boundary(&self.options.word_separator)?;
        let words = tokenizer::tokenize(&code, &self.options.letter_separator, &boundary)
            .into_iter()
            .map(|tokens| {
                tokens
                    .into_iter()
                    .filter_map(|token| decode_token(token, self.options.strict))
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        Ok(words.join(" "))
    }
}

/// Encodes `text` as Morse code.
///
/// ```
/// assert_eq!(morse::encode("SOS help", " ", " / ", false), "... --- ... / .... . .-.. .--.");
/// ```
pub fn encode(text: &str, letter_separator: &str, word_separator: &str, keep_unknown: bool) -> String {
    let options = MorseOptions {
        letter_separator: letter_separator.to_string(),
        word_separator: word_separator.to_string(),
        keep_unknown,
        ..MorseOptions::default()
    };
    Morse::encode(text, &options).to_string()
}

/// Decodes Morse code to uppercase text, or returns a diagnostic string.
pub fn decode(code: &str, letter_separator: &str, word_separator: &str, strict: bool) -> String {
    let options = MorseOptions {
        letter_separator: letter_separator.to_string(),
        word_separator: word_separator.to_string(),
        strict,
        ..MorseOptions::default()
    };
    or_diagnostic("morse", Morse::new(code, options).decode())
}
