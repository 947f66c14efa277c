pub mod error;
pub mod loader;
pub mod pkcs1;
pub mod pkcs8;
pub mod private_key;
pub mod public_key;
#[cfg(feature = "rustls")]
pub mod rustls;

pub use error::{Error, Result};
pub use loader::{KeyFormat, load_private_key};
pub use private_key::PrivateKey;
