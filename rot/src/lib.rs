//! Caesar / ROT rotation cipher.
//!
//! ASCII letters rotate within their own case; everything else, including
//! non-ASCII letters, passes through untouched. This is an obfuscation,
//! not encryption.

use serde::{Deserialize, Serialize};

const ALPHABET_LEN: i64 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotOptions {
    /// Any integer; reduced into `0..26` before use.
    pub shift: i64,
}

impl Default for RotOptions {
    fn default() -> Self {
        RotOptions { shift: 13 }
    }
}

impl RotOptions {
    /// The shift reduced into `0..26`, negative shifts included.
    pub fn normalized_shift(&self) -> u8 {
        self.shift.rem_euclid(ALPHABET_LEN) as u8
    }

    /// The shift that undoes this one.
    pub fn inverse(&self) -> RotOptions {
        RotOptions {
            shift: (ALPHABET_LEN - i64::from(self.normalized_shift())) % ALPHABET_LEN,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let shift = self.normalized_shift();
        if shift == 0 {
            return text.to_string();
        }
        text.chars().map(|c| rotate_char(c, shift)).collect()
    }
}

fn rotate_char(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    (base + (c as u8 - base + shift) % ALPHABET_LEN as u8) as char
}

/// ```
/// assert_eq!(rot::rotate("Attack At Dawn", 13), "Nggnpx Ng Qnja");
/// ```
pub fn rotate(text: &str, shift: i64) -> String {
    RotOptions { shift }.apply(text)
}
