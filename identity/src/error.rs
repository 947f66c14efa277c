use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why loading an identity failed.
///
/// Every failure is terminal: malformed key material does not become valid
/// on retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed PEM: {0}")]
    MalformedPem(#[source] kagi_pem::Error),
    #[error("invalid Base64 payload: {0}")]
    InvalidBase64(#[source] kagi_pem::Error),
    #[error("invalid certificate: {0}")]
    InvalidCertificate(#[source] kagi_x509::Error),
    #[error("invalid private key encoding: {0}")]
    InvalidKeyEncoding(#[source] kagi_pkcs::Error),
    #[error("unsupported key algorithm: {0}")]
    UnsupportedKeyAlgorithm(String),
    #[error("PKCS#1 key of {length} bytes is too large to wrap into PKCS#8")]
    KeyTooLarge { length: usize },
    #[error("private key does not match the certificate's public key")]
    KeyMismatch,
}

impl From<kagi_pem::Error> for Error {
    fn from(e: kagi_pem::Error) -> Self {
        match e {
            kagi_pem::Error::MissingPreEncapsulationBoundary
            | kagi_pem::Error::MissingPostEncapsulationBoundary
            | kagi_pem::Error::InvalidEncapsulationBoundary
            | kagi_pem::Error::InvalidLabel => Error::MalformedPem(e),
            kagi_pem::Error::MissingData | kagi_pem::Error::Base64Decode(_) => {
                Error::InvalidBase64(e)
            }
        }
    }
}

impl From<kagi_x509::Error> for Error {
    fn from(e: kagi_x509::Error) -> Self {
        match e {
            kagi_x509::Error::Pem(e) => Error::from(e),
            e => Error::InvalidCertificate(e),
        }
    }
}

impl From<kagi_pkcs::Error> for Error {
    fn from(e: kagi_pkcs::Error) -> Self {
        match e {
            kagi_pkcs::Error::Pem(e) => Error::from(e),
            kagi_pkcs::Error::UnsupportedKeyAlgorithm(oid) => Error::UnsupportedKeyAlgorithm(oid),
            kagi_pkcs::Error::KeyTooLarge { length } => Error::KeyTooLarge { length },
            e => Error::InvalidKeyEncoding(e),
        }
    }
}
