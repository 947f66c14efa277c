use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when scanning or decoding PEM data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Missing the opening boundary marker (e.g., `-----BEGIN CERTIFICATE-----`)
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// The opening marker is present but no closing marker follows it
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// The boundary pattern could not be compiled
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// No data found between boundary markers
    #[error("missing PEM data")]
    MissingData,

    /// The label in the boundary marker is not one kagi handles
    #[error("invalid label")]
    InvalidLabel,

    /// Failed to decode base64 data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
