//! Conversion between rustls-pki-types and kagi certificates.
//!
//! This module is only compiled when the `rustls` feature is enabled.

use rustls_pki_types::CertificateDer;

use crate::Certificate;
use crate::error::{Error, Result};

impl TryFrom<CertificateDer<'_>> for Certificate {
    type Error = Error;

    fn try_from(cert_der: CertificateDer<'_>) -> Result<Self> {
        Certificate::from_der(cert_der.as_ref())
    }
}

/// The certificate's original DER is handed over unchanged.
impl From<&Certificate> for CertificateDer<'static> {
    fn from(cert: &Certificate) -> Self {
        CertificateDer::from(cert.der().to_vec())
    }
}

impl From<Certificate> for CertificateDer<'static> {
    fn from(cert: Certificate) -> Self {
        CertificateDer::from(cert.der)
    }
}
