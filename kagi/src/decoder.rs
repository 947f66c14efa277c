//! Decoder trait for type-safe conversions.
//!
//! The decoder uses a two-trait pattern:
//!
//! 1. `Decoder<T, D>` performs the conversion from `T` into `D`.
//! 2. `DecodableFrom<T>` marks `D` as a valid target for `T`.
//!
//! Only explicitly marked pairs can be decoded, so a typo such as decoding
//! a certificate straight out of a PEM string without going through DER is
//! caught at compile time.
//!
//! ```no_run
//! use kagi::decoder::{DecodableFrom, Decoder};
//!
//! struct Base64Text(String);
//! struct Bytes(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct DecodeError;
//!
//! impl DecodableFrom<Base64Text> for Bytes {}
//!
//! impl Decoder<Base64Text, Bytes> for Base64Text {
//!     type Error = DecodeError;
//!
//!     fn decode(&self) -> Result<Bytes, Self::Error> {
//!         Ok(Bytes(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into a `D`.
///
/// `D` must opt in with [`DecodableFrom<T>`].
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid encoding of `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods. Implement it for every destination type that
/// gets a matching [`Decoder`] implementation:
///
/// ```no_run
/// use kagi::decoder::DecodableFrom;
///
/// struct Source;
/// struct Destination;
///
/// impl DecodableFrom<Source> for Destination {}
/// ```
pub trait DecodableFrom<T> {}
