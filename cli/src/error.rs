use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Identity(#[from] kagi_identity::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<kagi_pkcs::Error> for Error {
    fn from(e: kagi_pkcs::Error) -> Self {
        Error::Identity(kagi_identity::Error::from(e))
    }
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
