//! # henkan
//!
//! Core traits for the henkan text transcoders.
//!
//! This crate defines the `Decoder` and `Encoder` traits shared by every
//! format crate (`morse`, `radix`, `b64`, `percent`), the error taxonomy
//! those crates classify their failures into, and the helper that collapses
//! a failed decode into a diagnostic string.
//!
//! ## Overview
//!
//! Every encoded form is a value type wrapping its text:
//! ```text
//! &str ──encode──> Base64 ──decode──> String
//! ```
//!
//! The typed layer returns `Result`. The string layer every format crate
//! exposes on top of it is total: on failure it returns the error's
//! `Display` text in place of the decoded text.
//!
//! ## Example
//!
//! ```ignore
//! use henkan::decoder::Decoder;
//! use henkan::encoder::Encoder;
//! use b64::Base64;
//!
//! let encoded: Base64 = "Hello".encode()?;
//! assert_eq!(encoded.to_string(), "SGVsbG8=");
//!
//! let decoded: String = encoded.decode()?;
//! assert_eq!(decoded, "Hello");
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod diagnostic;
pub mod encoder;
pub mod error;
