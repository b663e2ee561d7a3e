//! Encoder trait, the mirror image of [`crate::decoder::Decoder`].
//!
//! Only encoders that need no options implement it. Encoders that take a
//! separator or a grouping width are plain constructors on the encoded
//! type (e.g. `Hex::encode(text, &options)`).

/// Encoder trait for converting from type `T` to type `E`.
///
/// Implemented by the source type. The destination type must implement
/// `EncodableTo<T>`.
///
/// ```no_run
/// use henkan::encoder::{EncodableTo, Encoder};
///
/// struct Shouted(String);
///
/// impl<'a> EncodableTo<&'a str> for Shouted {}
///
/// impl<'a> Encoder<&'a str, Shouted> for &'a str {
///     type Error = std::convert::Infallible;
///
///     fn encode(&self) -> Result<Shouted, Self::Error> {
///         Ok(Shouted(self.to_uppercase()))
///     }
/// }
/// ```
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
