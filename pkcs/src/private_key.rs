//! Validated RSA private key.
//!
//! [`PrivateKey`] is always built from PKCS#8 `PrivateKeyInfo` DER, whatever
//! format the key was loaded from. PKCS#1 keys are wrapped first, so both
//! paths go through the same checks and yield the same value.

use std::fmt;

use kagi_pem::{Label, Pem};
use kagi_pkix_types::{AlgorithmIdentifier, OidName};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::pkcs1::{RSAPrivateKey, RSAPublicKey};
use crate::pkcs8::{PrivateKeyInfo, wrap_rsa_private_key};

#[derive(Clone)]
pub struct PrivateKey {
    der: Zeroizing<Vec<u8>>,
    algorithm: AlgorithmIdentifier,
    public_key: RSAPublicKey,
}

impl PrivateKey {
    /// Decodes PKCS#8 `PrivateKeyInfo` DER holding an RSA key.
    ///
    /// Fails with [`Error::UnsupportedKeyAlgorithm`] when the key is well formed
    /// but not rsaEncryption.
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        let info = PrivateKeyInfo::from_der(der)?;
        let algorithm = info.private_key_algorithm;
        if !algorithm.is_rsa_encryption() {
            return Err(Error::UnsupportedKeyAlgorithm(
                algorithm.algorithm().to_string(),
            ));
        }
        let rsa = RSAPrivateKey::from_der(info.private_key.as_bytes())?;
        Ok(PrivateKey {
            der: Zeroizing::new(der.to_vec()),
            algorithm,
            public_key: rsa.public_key(),
        })
    }

    /// Decodes PKCS#1 `RSAPrivateKey` DER by wrapping it into PKCS#8 first.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        let wrapped = wrap_rsa_private_key(der)?;
        Self::from_pkcs8_der(&wrapped)
    }

    /// Canonical PKCS#8 DER encoding of the key.
    pub fn pkcs8_der(&self) -> &[u8] {
        &self.der
    }

    pub fn algorithm(&self) -> &AlgorithmIdentifier {
        &self.algorithm
    }

    pub fn public_key(&self) -> &RSAPublicKey {
        &self.public_key
    }

    /// Modulus length in bits.
    pub fn key_size(&self) -> u64 {
        self.public_key.key_size()
    }

    pub fn to_pem(&self) -> Pem {
        Pem::from_bytes(Label::PrivateKey, &self.der)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field(
                "algorithm",
                &self.algorithm.oid_name().unwrap_or("unknown"),
            )
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}
