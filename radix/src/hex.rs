//! Text to hexadecimal, one pair per UTF-8 byte.

use std::fmt::{Display, Formatter};

use henkan::decoder::{DecodableFrom, Decoder};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexOptions {
    pub delimiter: String,
    pub uppercase: bool,
    /// Bytes between delimiters. 0 writes one undelimited run.
    pub bytes_per_group: usize,
}

impl Default for HexOptions {
    fn default() -> Self {
        HexOptions {
            delimiter: " ".to_string(),
            uppercase: true,
            bytes_per_group: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hex(String);

impl Hex {
    pub fn new(digits: impl Into<String>) -> Self {
        Hex(digits.into())
    }

    pub fn encode(text: &str, options: &HexOptions) -> Self {
        let bytes = text.as_bytes();
        let group = if options.bytes_per_group == 0 {
            bytes.len().max(1)
        } else {
            options.bytes_per_group
        };
        let digits = bytes
            .chunks(group)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|b| {
                        if options.uppercase {
                            format!("{b:02X}")
                        } else {
                            format!("{b:02x}")
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(options.delimiter.as_str());
        Hex(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DecodableFrom<Hex> for String {}

impl Decoder<Hex, String> for Hex {
    type Error = Error;

    /// Every character outside `[0-9a-fA-F]` is ignored before pairing.
    fn decode(&self) -> Result<String, Self::Error> {
        let nibbles = self
            .0
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect::<Vec<u8>>();
        if nibbles.len() % 2 != 0 {
            return Err(Error::OddHexLength(nibbles.len()));
        }
        let bytes = nibbles
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect::<Vec<u8>>();
        String::from_utf8(bytes).map_err(Error::InvalidUtf8)
    }
}
