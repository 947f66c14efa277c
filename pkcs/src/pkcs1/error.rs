use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("ASN.1 error: {0}")]
    Asn1(#[from] kagi_asn1::error::Error),

    #[error("invalid DER: {0}")]
    InvalidDer(#[from] kagi_der::Error),

    #[error("expected SEQUENCE")]
    ExpectedSequence,

    #[error("expected {expected} elements, got {actual}")]
    InvalidElementCount {
        expected: &'static str,
        actual: usize,
    },

    #[error("expected INTEGER for {field}")]
    ExpectedInteger { field: &'static str },

    #[error("invalid version: {0} (must be 0 for two-prime or 1 for multi-prime)")]
    InvalidVersion(i64),

    #[error("version out of range for i64")]
    VersionOutOfRange,

    #[error("otherPrimeInfos must be present if and only if version is multi")]
    OtherPrimeInfosMismatch,

    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("modulus is not the product of prime1 and prime2")]
    ModulusMismatch,

    #[error("empty ASN1Object")]
    EmptyAsn1Object,

    #[error("trailing data after RSA key")]
    TrailingData,
}

pub type Result<T> = std::result::Result<T, Error>;
