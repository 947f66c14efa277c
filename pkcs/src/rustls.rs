//! Conversion between rustls-pki-types and kagi private keys.
//!
//! This module is only compiled when the `rustls` feature is enabled.

use rustls_pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};

use crate::error::{Error, Result};
use crate::private_key::PrivateKey;

/// A [`PrivateKey`] always hands rustls its PKCS#8 encoding.
impl From<&PrivateKey> for PrivateKeyDer<'static> {
    fn from(key: &PrivateKey) -> Self {
        PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key.pkcs8_der().to_vec()))
    }
}

impl From<PrivateKey> for PrivateKeyDer<'static> {
    fn from(key: PrivateKey) -> Self {
        PrivateKeyDer::from(&key)
    }
}

impl TryFrom<PrivateKeyDer<'_>> for PrivateKey {
    type Error = Error;

    fn try_from(key: PrivateKeyDer<'_>) -> Result<Self> {
        match key {
            PrivateKeyDer::Pkcs8(der) => PrivateKey::from_pkcs8_der(der.secret_pkcs8_der()),
            PrivateKeyDer::Pkcs1(der) => PrivateKey::from_pkcs1_der(der.secret_pkcs1_der()),
            PrivateKeyDer::Sec1(_) => Err(Error::UnsupportedKeyAlgorithm("SEC1".to_string())),
            _ => Err(Error::UnsupportedKeyAlgorithm("unknown".to_string())),
        }
    }
}
