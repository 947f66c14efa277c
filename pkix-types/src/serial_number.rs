//! Certificate Serial Number
//!
//! Defined in RFC 5280 Section 4.1.2.2
//!
//! ```asn1
//! CertificateSerialNumber ::= INTEGER
//! ```

use std::fmt;

use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{Element, Integer};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CertificateSerialNumber {
    inner: Integer,
}

impl CertificateSerialNumber {
    pub fn as_integer(&self) -> &Integer {
        &self.inner
    }

    /// Lowercase hex with colon separators, the way OpenSSL prints serials
    /// (e.g. "3a:b5:aa:dd").
    pub fn format_hex(&self) -> String {
        self.inner
            .to_signed_bytes_be()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl From<Integer> for CertificateSerialNumber {
    fn from(inner: Integer) -> Self {
        Self { inner }
    }
}

impl fmt::Display for CertificateSerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_hex())
    }
}

impl DecodableFrom<Element> for CertificateSerialNumber {}

impl Decoder<Element, CertificateSerialNumber> for Element {
    type Error = Error;

    fn decode(&self) -> Result<CertificateSerialNumber> {
        match self {
            Element::Integer(i) => Ok(CertificateSerialNumber::from(i.clone())),
            _ => Err(Error::CertificateSerialNumberExpectedInteger),
        }
    }
}
