use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid version: {0}")]
    InvalidVersion(i64),

    #[error("expected INTEGER for version")]
    ExpectedVersionInteger,

    #[error("expected SEQUENCE")]
    ExpectedSequence,

    #[error("expected {expected} elements, got {actual}")]
    InvalidElementCount {
        expected: &'static str,
        actual: usize,
    },

    #[error("expected OCTET STRING for privateKey")]
    ExpectedPrivateKeyOctetString,

    #[error("unexpected element after privateKey: {0}")]
    UnexpectedElement(String),

    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("publicKey [1] requires version v2")]
    PublicKeyRequiresV2,

    #[error("empty ASN1Object")]
    EmptyAsn1Object,

    #[error("trailing data after PrivateKeyInfo")]
    TrailingData,

    #[error("ASN.1 error: {0}")]
    Asn1(#[from] kagi_asn1::error::Error),

    #[error("DER error: {0}")]
    Der(#[from] kagi_der::Error),

    #[error("PKIX types error: {0}")]
    PkixTypes(#[from] kagi_pkix_types::Error),
}
