//! RSA public keys carried in `SubjectPublicKeyInfo`.

use kagi_pkix_types::SubjectPublicKeyInfo;

use crate::error::{Error, Result};
use crate::pkcs1::RSAPublicKey;

impl TryFrom<&SubjectPublicKeyInfo> for RSAPublicKey {
    type Error = Error;

    fn try_from(spki: &SubjectPublicKeyInfo) -> Result<Self> {
        if !spki.algorithm().is_rsa_encryption() {
            return Err(Error::UnsupportedKeyAlgorithm(
                spki.algorithm().algorithm().to_string(),
            ));
        }
        Ok(RSAPublicKey::from_der(spki.subject_public_key().as_bytes())?)
    }
}
