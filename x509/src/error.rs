use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("certificate: expected SEQUENCE")]
    CertificateExpectedSequence,
    #[error("certificate: expected 3 elements, got {0}")]
    CertificateInvalidElementCount(usize),
    #[error("certificate: expected BIT STRING for signatureValue")]
    CertificateExpectedBitString,
    #[error("certificate: signature algorithm {outer} does not match TBS signature {inner}")]
    SignatureAlgorithmMismatch { outer: String, inner: String },

    #[error("TBSCertificate: expected SEQUENCE")]
    TbsExpectedSequence,
    #[error("TBSCertificate: expected at least 6 elements, got {0}")]
    TbsInvalidElementCount(usize),
    #[error("TBSCertificate: unexpected element {0}")]
    TbsUnexpectedElement(String),

    #[error("version: expected INTEGER")]
    VersionExpectedInteger,
    #[error("version: unsupported value {0}")]
    UnsupportedVersion(String),

    #[error("validity: expected SEQUENCE")]
    ValidityExpectedSequence,
    #[error("validity: expected 2 elements, got {0}")]
    ValidityInvalidElementCount(usize),
    #[error("validity: invalid {0} time")]
    ValidityExpectedTime(&'static str),

    #[error("[{slot}] EXPLICIT: expected exactly one element, got {count}")]
    ExplicitTagInvalidElementCount { slot: u8, count: usize },

    #[error("unique identifiers require version v2 or v3")]
    UniqueIdentifierRequiresV2,
    #[error("extensions require version v3")]
    ExtensionsRequireV3,
    #[error("extensions: expected SEQUENCE")]
    ExtensionsExpectedSequence,

    #[error("empty ASN.1 object")]
    EmptyAsn1Object,
    #[error("trailing data after certificate")]
    TrailingData,

    #[error("PEM error: {0}")]
    Pem(#[from] kagi_pem::Error),
    #[error("DER error: {0}")]
    Der(#[from] kagi_der::error::Error),
    #[error("ASN.1 error: {0}")]
    Asn1(#[from] kagi_asn1::error::Error),
    #[error("PKIX types error: {0}")]
    PkixTypes(#[from] kagi_pkix_types::Error),
}
