//! PKIX Extension type
//!
//! RFC 5280 Section 4.1.2.9
//!
//! ```asn1
//! Extension  ::=  SEQUENCE  {
//!     extnID      OBJECT IDENTIFIER,
//!     critical    BOOLEAN DEFAULT FALSE,
//!     extnValue   OCTET STRING
//! }
//! ```
//!
//! Only the envelope is decoded. The content of `extnValue` stays raw.

use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{Element, ObjectIdentifier, OctetString};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    id: ObjectIdentifier,
    critical: bool,
    value: OctetString,
}

impl Extension {
    pub const OID_SUBJECT_KEY_IDENTIFIER: &'static str = "2.5.29.14";
    pub const OID_KEY_USAGE: &'static str = "2.5.29.15";
    pub const OID_SUBJECT_ALT_NAME: &'static str = "2.5.29.17";
    pub const OID_BASIC_CONSTRAINTS: &'static str = "2.5.29.19";
    pub const OID_EXTENDED_KEY_USAGE: &'static str = "2.5.29.37";
    pub const OID_AUTHORITY_KEY_IDENTIFIER: &'static str = "2.5.29.35";

    pub fn new(id: ObjectIdentifier, critical: bool, value: OctetString) -> Self {
        Self {
            id,
            critical,
            value,
        }
    }

    pub fn oid(&self) -> &ObjectIdentifier {
        &self.id
    }

    pub fn is_critical(&self) -> bool {
        self.critical
    }

    /// Get the raw extension value (DER-encoded ASN.1)
    pub fn value(&self) -> &OctetString {
        &self.value
    }
}

impl DecodableFrom<Element> for Extension {}

impl Decoder<Element, Extension> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Extension> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExtensionExpectedSequence);
        };

        // critical has DEFAULT FALSE, so it may be omitted
        let (id, critical, value) = match elements.as_slice() {
            [id, value] => (id, None, value),
            [id, critical, value] => (id, Some(critical), value),
            _ => return Err(Error::ExtensionInvalidElementCount(elements.len())),
        };
        let Element::ObjectIdentifier(id) = id else {
            return Err(Error::ExtensionExpectedOidForExtnId);
        };
        let critical = match critical {
            None => false,
            Some(Element::Boolean(b)) => *b,
            Some(_) => return Err(Error::ExtensionExpectedBoolean),
        };
        let Element::OctetString(value) = value else {
            return Err(Error::ExtensionExpectedOctetString);
        };

        Ok(Extension::new(id.clone(), critical, value.clone()))
    }
}
