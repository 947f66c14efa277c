//! PKCS#1 to PKCS#8 wrapping.
//!
//! A bare `RSAPrivateKey` is turned into a `PrivateKeyInfo` by prefixing a
//! fixed header:
//!
//! ```text
//! 30 82 TT TT                          SEQUENCE, TT TT = L + 22
//!    02 01 00                          INTEGER 0 (v1)
//!    30 0d                             AlgorithmIdentifier
//!       06 09 2a 86 48 86 f7 0d 01 01 01   rsaEncryption
//!       05 00                          NULL
//!    04 82 LL LL                       OCTET STRING, LL LL = L
//!       <L bytes of PKCS#1 DER>
//! ```
//!
//! Both lengths always use the two-octet long form, even when a shorter
//! form would do. The output is identical to what OpenSSL emits for RSA
//! keys of 1024 bits and up.

use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Bytes of the PrivateKeyInfo content that precede the PKCS#1 payload:
/// version (3), AlgorithmIdentifier (15) and the OCTET STRING header (4).
pub const WRAPPER_FIELDS_LEN: usize = 22;

/// Full header length including the outer SEQUENCE tag and length.
pub const HEADER_LEN: usize = WRAPPER_FIELDS_LEN + 4;

// version INTEGER 0, then AlgorithmIdentifier { rsaEncryption, NULL }
const VERSION_AND_ALGORITHM: [u8; 18] = [
    0x02, 0x01, 0x00, 0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01,
    0x01, 0x05, 0x00,
];

const TAG_SEQUENCE: u8 = 0x30;
const TAG_OCTET_STRING: u8 = 0x04;
const LONG_FORM_TWO_OCTETS: u8 = 0x82;

/// Wraps DER PKCS#1 `RSAPrivateKey` bytes into DER PKCS#8 `PrivateKeyInfo`.
///
/// The payload is not inspected. Fails with [`Error::KeyTooLarge`] when
/// `L + 22` does not fit in the two-octet length field.
pub fn wrap_rsa_private_key(pkcs1: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let length = pkcs1.len();
    let total = length
        .checked_add(WRAPPER_FIELDS_LEN)
        .and_then(|total| u16::try_from(total).ok())
        .ok_or(Error::KeyTooLarge { length })?;
    let octets = u16::try_from(length).map_err(|_| Error::KeyTooLarge { length })?;

    let mut der = Zeroizing::new(Vec::with_capacity(HEADER_LEN + length));
    der.extend_from_slice(&[TAG_SEQUENCE, LONG_FORM_TWO_OCTETS]);
    der.extend_from_slice(&total.to_be_bytes());
    der.extend_from_slice(&VERSION_AND_ALGORITHM);
    der.extend_from_slice(&[TAG_OCTET_STRING, LONG_FORM_TWO_OCTETS]);
    der.extend_from_slice(&octets.to_be_bytes());
    der.extend_from_slice(pkcs1);
    trace!(pkcs1_len = length, pkcs8_len = der.len(), "wrapped PKCS#1 key");
    Ok(der)
}
