//! Error types for PKIX types

use thiserror::Error;

/// Result type for PKIX types operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // AlgorithmIdentifier errors
    #[error("AlgorithmIdentifier: expected SEQUENCE")]
    AlgorithmIdentifierExpectedSequence,
    #[error("AlgorithmIdentifier: expected 1 or 2 elements, got {0}")]
    AlgorithmIdentifierInvalidElementCount(usize),
    #[error("AlgorithmIdentifier: expected OBJECT IDENTIFIER for algorithm")]
    AlgorithmIdentifierExpectedOid,

    // Extension errors
    #[error("Extension: expected SEQUENCE")]
    ExtensionExpectedSequence,
    #[error("Extension: expected 2 or 3 elements, got {0}")]
    ExtensionInvalidElementCount(usize),
    #[error("Extension: expected OBJECT IDENTIFIER for extnID")]
    ExtensionExpectedOidForExtnId,
    #[error("Extension: expected BOOLEAN for critical")]
    ExtensionExpectedBoolean,
    #[error("Extension: expected OCTET STRING for extnValue")]
    ExtensionExpectedOctetString,

    // Name errors
    #[error("Name: expected SEQUENCE")]
    NameExpectedSequence,
    #[error("RelativeDistinguishedName: expected SET")]
    RdnExpectedSet,
    #[error("AttributeTypeAndValue: expected SEQUENCE")]
    AttributeTypeAndValueExpectedSequence,
    #[error("AttributeTypeAndValue: expected OBJECT IDENTIFIER for attribute type")]
    AttributeTypeAndValueExpectedOid,
    #[error("AttributeTypeAndValue: expected 2 elements")]
    AttributeTypeAndValueInvalidElementCount,

    // CertificateSerialNumber errors
    #[error("CertificateSerialNumber: expected INTEGER")]
    CertificateSerialNumberExpectedInteger,

    // SubjectPublicKeyInfo errors
    #[error("SubjectPublicKeyInfo: expected SEQUENCE")]
    SubjectPublicKeyInfoExpectedSequence,
    #[error("SubjectPublicKeyInfo: expected 2 elements, got {0}")]
    SubjectPublicKeyInfoInvalidElementCount(usize),
    #[error("SubjectPublicKeyInfo: expected BIT STRING for subject public key")]
    SubjectPublicKeyInfoExpectedBitString,

    #[error("ASN.1 error: {0}")]
    ASN1Error(#[from] kagi_asn1::error::Error),
}
