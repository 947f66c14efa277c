use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("PEM error: {0}")]
    Pem(#[from] kagi_pem::Error),

    #[error("PKCS#1 error: {0}")]
    Pkcs1(#[from] crate::pkcs1::Error),

    #[error("PKCS#8 error: {0}")]
    Pkcs8(#[from] crate::pkcs8::Error),

    #[error("unsupported key algorithm: {0}")]
    UnsupportedKeyAlgorithm(String),

    #[error("PKCS#1 key of {length} bytes does not fit a two-octet DER length")]
    KeyTooLarge { length: usize },

    #[error("encrypted private keys are not supported ({0})")]
    EncryptedKey(&'static str),

    #[error("unsupported PEM block \"{label}\": {source}")]
    UnsupportedPemLabel {
        label: String,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
