//! Text to base-2, one group per Unicode scalar value.
//!
//! A character outside the BMP becomes a single group holding its full code
//! point, never two surrogate halves or several UTF-8 bytes.

use std::fmt::{Display, Formatter};

use henkan::decoder::{DecodableFrom, Decoder};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinaryOptions {
    /// Each group is left-padded with zeros to a multiple of this width. 0 disables padding.
    pub group_size_bits: usize,
    pub delimiter: String,
    pub uppercase: bool,
}

impl Default for BinaryOptions {
    fn default() -> Self {
        BinaryOptions {
            group_size_bits: 8,
            delimiter: " ".to_string(),
            uppercase: false,
        }
    }
}

/// Binary digit groups, as produced by [`Binary::encode`] or typed by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary(String);

impl Binary {
    pub fn new(digits: impl Into<String>) -> Self {
        Binary(digits.into())
    }

    pub fn encode(text: &str, options: &BinaryOptions) -> Self {
        let digits = text
            .chars()
            .map(|c| pad_to_group(format!("{:b}", u32::from(c)), options.group_size_bits))
            .collect::<Vec<_>>()
            .join(options.delimiter.as_str());
        if options.uppercase {
            Binary(digits.to_uppercase())
        } else {
            Binary(digits)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn pad_to_group(bits: String, group_size_bits: usize) -> String {
    if group_size_bits == 0 {
        return bits;
    }
    let width = bits.len().div_ceil(group_size_bits) * group_size_bits;
    format!("{bits:0>width$}")
}

impl Display for Binary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DecodableFrom<Binary> for String {}

impl Decoder<Binary, String> for Binary {
    type Error = Error;

    /// Anything other than `0`, `1` and whitespace separates groups.
    fn decode(&self) -> Result<String, Self::Error> {
        let cleaned = self
            .0
            .chars()
            .map(|c| {
                if c == '0' || c == '1' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect::<String>();
        let tokens = cleaned.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() {
            if self.0.trim().is_empty() {
                return Ok(String::new());
            }
            return Err(Error::NoBinaryDigits);
        }
        tokens
            .into_iter()
            .map(|token| {
                let value = u32::from_str_radix(token, 2)
                    .map_err(|_| Error::BinaryOverflow(token.to_string()))?;
                char::from_u32(value).ok_or(Error::InvalidScalar(value))
            })
            .collect()
    }
}
