//! TLS identity loading.
//!
//! A certificate file and a private key file are turned into an [`Identity`]:
//! the decoded X.509 certificate plus a validated RSA private key in
//! canonical PKCS#8 form.
//!
//! ```no_run
//! use kagi_identity::{KeyMaterialLoader, build_identity};
//!
//! // Accepts PKCS#1 PEM, PKCS#8 PEM or PKCS#8 DER keys.
//! let identity = build_identity("server.crt", "server.key").unwrap();
//! println!("{}", identity.certificate().subject());
//!
//! // Refuse a key that does not belong to the certificate.
//! let identity = KeyMaterialLoader::new()
//!     .require_matching_key(true)
//!     .load("server.crt", "server.key")
//!     .unwrap();
//! assert!(identity.key_matches_certificate());
//! ```

use std::io::ErrorKind;
use std::path::Path;

use kagi_pkcs::pkcs1::RSAPublicKey;
use kagi_pkcs::{PrivateKey, load_private_key};
use kagi_x509::{Certificate, load_certificate};
use tracing::debug;
use zeroize::Zeroizing;

pub mod error;

pub use error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    certificate: Certificate,
    private_key: PrivateKey,
}

impl Identity {
    pub fn new(certificate: Certificate, private_key: PrivateKey) -> Self {
        Identity {
            certificate,
            private_key,
        }
    }

    pub fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn into_parts(self) -> (Certificate, PrivateKey) {
        (self.certificate, self.private_key)
    }

    /// Whether the certificate's RSA public key has the same modulus and
    /// public exponent as the private key.
    ///
    /// A certificate whose key is not RSA never matches.
    pub fn key_matches_certificate(&self) -> bool {
        RSAPublicKey::try_from(self.certificate.subject_public_key_info())
            .is_ok_and(|public_key| &public_key == self.private_key.public_key())
    }

    /// The certificate chain and key in the form rustls' `ServerConfig` and
    /// `ClientConfig` builders take.
    #[cfg(feature = "rustls")]
    pub fn into_rustls(
        self,
    ) -> (
        Vec<rustls_pki_types::CertificateDer<'static>>,
        rustls_pki_types::PrivateKeyDer<'static>,
    ) {
        (vec![self.certificate.into()], self.private_key.into())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyMaterialLoader {
    require_matching_key: bool,
}

impl KeyMaterialLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`Error::KeyMismatch`] when the key does not belong to the
    /// certificate. Off by default.
    pub fn require_matching_key(mut self, require: bool) -> Self {
        self.require_matching_key = require;
        self
    }

    /// Reads both files, then decodes them.
    ///
    /// Missing or unreadable files are reported before any decoding starts.
    pub fn load(&self, cert_path: impl AsRef<Path>, key_path: impl AsRef<Path>) -> Result<Identity> {
        let cert = read_file(cert_path.as_ref())?;
        let key = Zeroizing::new(read_file(key_path.as_ref())?);
        self.load_from_bytes(&cert, &key)
    }

    pub fn load_from_bytes(&self, cert: &[u8], key: &[u8]) -> Result<Identity> {
        let certificate = load_certificate(cert)?;
        let private_key = load_private_key(key)?;
        let identity = Identity::new(certificate, private_key);

        if self.require_matching_key && !identity.key_matches_certificate() {
            return Err(Error::KeyMismatch);
        }
        debug!(
            subject = %identity.certificate.subject(),
            key_size = identity.private_key.key_size(),
            "loaded identity"
        );
        Ok(identity)
    }
}

/// Loads an identity with the default [`KeyMaterialLoader`] settings.
pub fn build_identity(cert_path: impl AsRef<Path>, key_path: impl AsRef<Path>) -> Result<Identity> {
    KeyMaterialLoader::new().load(cert_path, key_path)
}

/// Reads a whole file, classifying a missing path as [`Error::FileNotFound`].
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read file");
    Ok(bytes)
}
