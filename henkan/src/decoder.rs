//! Decoder trait for type-safe conversions back to text.
//!
//! The `Decoder` trait converts an encoded form `T` back into a
//! destination type `D`, almost always `String`. Every format crate
//! implements it on its encoded value type.
//!
//! # Design Pattern
//!
//! Two traits work together:
//!
//! 1. `Decoder<T, D>` - performs the conversion
//! 2. `DecodableFrom<T>` - marker trait naming the valid destinations
//!
//! so a decode into a type that was never declared as a destination fails
//! to compile rather than at run time.
//!
//! # Example
//!
//! The `radix` crate decodes hex text back into UTF-8 text:
//!
//! ```ignore
//! use henkan::decoder::Decoder;
//! use radix::Hex;
//!
//! let hex = Hex::new("48 69");
//! let text: String = hex.decode()?;
//! assert_eq!(text, "Hi");
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type `T`. The destination type must implement
/// `DecodableFrom<T>`.
///
/// ```no_run
/// use henkan::decoder::{DecodableFrom, Decoder};
///
/// struct Reversed(String);
///
/// #[derive(Debug)]
/// struct Never;
///
/// impl DecodableFrom<Reversed> for String {}
///
/// impl Decoder<Reversed, String> for Reversed {
///     type Error = Never;
///
///     fn decode(&self) -> Result<String, Self::Error> {
///         Ok(self.0.chars().rev().collect())
///     }
/// }
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoded form is malformed, names an unknown
    /// symbol, or yields bytes that are not valid UTF-8.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for each destination a source type
/// supports:
///
/// ```no_run
/// use henkan::decoder::DecodableFrom;
///
/// struct Encoded;
///
/// impl DecodableFrom<Encoded> for String {}
/// ```
pub trait DecodableFrom<T> {}
