//! PKCS#8: Private-Key Information Syntax
//!
//! Decodes `PrivateKeyInfo` ([RFC 5208](https://datatracker.ietf.org/doc/html/rfc5208),
//! extended by [RFC 5958](https://datatracker.ietf.org/doc/html/rfc5958)) and wraps
//! bare PKCS#1 RSA keys into it.

pub mod error;
mod types;
mod wrap;

pub use error::{Error, Result};
pub use kagi_pkix_types::{AlgorithmIdentifier, AlgorithmParameters};
pub use types::{Attribute, PrivateKeyInfo, Version};
pub use wrap::{HEADER_LEN, WRAPPER_FIELDS_LEN, wrap_rsa_private_key};
