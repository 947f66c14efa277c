//! PKIX (Public Key Infrastructure using X.509) Common Types
//!
//! Types shared by X.509 certificates (RFC 5280) and PKCS#8 private keys
//! (RFC 5208).

pub mod algorithm;
pub mod error;
pub mod extension;
pub mod name;
pub mod oid_name;
pub mod serial_number;
pub mod subject_public_key_info;

pub use algorithm::{AlgorithmIdentifier, AlgorithmParameters};
pub use error::{Error, Result};
pub use extension::Extension;
pub use name::{AttributeTypeAndValue, AttributeValue, Name, RelativeDistinguishedName};
pub use oid_name::OidName;
pub use serial_number::CertificateSerialNumber;
pub use subject_public_key_info::SubjectPublicKeyInfo;
