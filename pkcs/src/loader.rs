//! Private key classification and loading.
//!
//! Key files come in three shapes: PKCS#1 PEM (`RSA PRIVATE KEY`), PKCS#8
//! PEM (`PRIVATE KEY`) and binary PKCS#8 DER. The shape is decided by
//! substring search over the file read as text, in that order, so a file
//! holding both kinds of block is treated as PKCS#1.

use std::fmt;

use kagi_pem::{Label, boundary_label, decode_base64, strip_markers};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::private_key::PrivateKey;

const ENCRYPTED_PEM_HEADER: &str = "Proc-Type: 4,ENCRYPTED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    Pkcs1Pem,
    Pkcs8Pem,
    Pkcs8Der,
}

impl KeyFormat {
    pub fn detect(bytes: &[u8]) -> Self {
        Self::detect_text(&String::from_utf8_lossy(bytes))
    }

    fn detect_text(text: &str) -> Self {
        if text.contains(Label::RSAPrivateKey.header()) {
            KeyFormat::Pkcs1Pem
        } else if text.contains(Label::PrivateKey.header()) {
            KeyFormat::Pkcs8Pem
        } else {
            KeyFormat::Pkcs8Der
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyFormat::Pkcs1Pem => "PKCS#1 PEM",
            KeyFormat::Pkcs8Pem => "PKCS#8 PEM",
            KeyFormat::Pkcs8Der => "PKCS#8 DER",
        };
        write!(f, "{}", name)
    }
}

/// Loads an RSA private key from the raw contents of a key file.
///
/// PEM markers are removed wherever they occur in the text before the
/// remainder is Base64 decoded. Input without a known marker is parsed as
/// PKCS#8 DER exactly as given.
pub fn load_private_key(bytes: &[u8]) -> Result<PrivateKey> {
    let text = String::from_utf8_lossy(bytes);
    let format = KeyFormat::detect_text(&text);
    debug!(%format, len = bytes.len(), "detected private key format");

    match format {
        KeyFormat::Pkcs1Pem => {
            if text.contains(ENCRYPTED_PEM_HEADER) {
                return Err(Error::EncryptedKey("RSA PRIVATE KEY with Proc-Type header"));
            }
            let payload = Zeroizing::new(strip_markers(&text, Label::RSAPrivateKey));
            let pkcs1 = decode_base64(&payload)?;
            debug!(pkcs1_len = pkcs1.len(), "wrapping PKCS#1 key into PKCS#8");
            PrivateKey::from_pkcs1_der(&pkcs1)
        }
        KeyFormat::Pkcs8Pem => {
            let payload = Zeroizing::new(strip_markers(&text, Label::PrivateKey));
            let pkcs8 = decode_base64(&payload)?;
            PrivateKey::from_pkcs8_der(&pkcs8)
        }
        KeyFormat::Pkcs8Der => PrivateKey::from_pkcs8_der(bytes).map_err(|e| {
            // Name the PEM block we could not handle instead of reporting a DER error.
            match boundary_label(&text) {
                Ok(Some(label)) if label.parse::<Label>() == Ok(Label::EncryptedPrivateKey) => {
                    Error::EncryptedKey("ENCRYPTED PRIVATE KEY")
                }
                Ok(Some(label)) => Error::UnsupportedPemLabel {
                    label,
                    source: Box::new(e),
                },
                Ok(None) => e,
                Err(pem) => Error::Pem(pem),
            }
        }),
    }
}
