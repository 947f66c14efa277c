//! Name and related types
//!
//! Defined in RFC 5280 Section 4.1.2.4
//!
//! ```asn1
//! Name ::= CHOICE { -- only one possibility for now --
//!     rdnSequence  RDNSequence
//! }
//!
//! RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
//!
//! RelativeDistinguishedName ::= SET OF AttributeTypeAndValue
//!
//! AttributeTypeAndValue ::= SEQUENCE {
//!     type     AttributeType,
//!     value    AttributeValue
//! }
//! ```

use std::fmt;

use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{Element, ObjectIdentifier};

use crate::OidName;
use crate::error::{Error, Result};

/// X.509 Distinguished Name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub rdn_sequence: Vec<RelativeDistinguishedName>,
}

impl Name {
    pub fn new(rdn_sequence: Vec<RelativeDistinguishedName>) -> Self {
        Self { rdn_sequence }
    }

    pub fn rdn_sequence(&self) -> &[RelativeDistinguishedName] {
        &self.rdn_sequence
    }

    /// First commonName attribute, if any.
    pub fn common_name(&self) -> Option<&str> {
        self.rdn_sequence
            .iter()
            .flat_map(|rdn| rdn.attributes.iter())
            .find(|attr| attr.attribute_type == AttributeTypeAndValue::OID_COMMON_NAME)
            .and_then(|attr| attr.value_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .rdn_sequence
            .iter()
            .map(|rdn| {
                rdn.attributes
                    .iter()
                    .map(|attr| attr.to_string())
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", formatted)
    }
}

impl DecodableFrom<Element> for Name {}

impl Decoder<Element, Name> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Name> {
        match self {
            Element::Sequence(elements) => {
                let rdn_sequence = elements
                    .iter()
                    .map(|elem| elem.decode())
                    .collect::<Result<Vec<RelativeDistinguishedName>>>()?;
                Ok(Name { rdn_sequence })
            }
            _ => Err(Error::NameExpectedSequence),
        }
    }
}

/// Relative Distinguished Name (RDN)
///
/// Usually a single attribute; multi-valued RDNs are kept as parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeDistinguishedName {
    pub attributes: Vec<AttributeTypeAndValue>,
}

impl RelativeDistinguishedName {
    pub fn new(attributes: Vec<AttributeTypeAndValue>) -> Self {
        Self { attributes }
    }
}

impl DecodableFrom<Element> for RelativeDistinguishedName {}

impl Decoder<Element, RelativeDistinguishedName> for Element {
    type Error = Error;

    fn decode(&self) -> Result<RelativeDistinguishedName> {
        match self {
            Element::Set(elements) => {
                let attributes = elements
                    .iter()
                    .map(|elem| elem.decode())
                    .collect::<Result<Vec<AttributeTypeAndValue>>>()?;
                Ok(RelativeDistinguishedName { attributes })
            }
            _ => Err(Error::RdnExpectedSet),
        }
    }
}

/// Value of a name attribute.
///
/// Directory strings are decoded to text. Anything else is kept as the
/// raw element so that unusual attributes do not fail certificate loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Other(Element),
}

impl From<&Element> for AttributeValue {
    fn from(element: &Element) -> Self {
        match element {
            Element::UTF8String(s) | Element::PrintableString(s) | Element::IA5String(s) => {
                AttributeValue::Text(s.clone())
            }
            other => AttributeValue::Other(other.clone()),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{}", s),
            AttributeValue::Other(elm) => write!(f, "{}", elm),
        }
    }
}

/// Attribute Type and Value pair, such as CN=example.com
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTypeAndValue {
    pub attribute_type: ObjectIdentifier,
    pub attribute_value: AttributeValue,
}

impl AttributeTypeAndValue {
    pub const OID_COMMON_NAME: &'static str = "2.5.4.3";
    pub const OID_SERIAL_NUMBER: &'static str = "2.5.4.5";
    pub const OID_COUNTRY_NAME: &'static str = "2.5.4.6";
    pub const OID_LOCALITY_NAME: &'static str = "2.5.4.7";
    pub const OID_STATE_OR_PROVINCE_NAME: &'static str = "2.5.4.8";
    pub const OID_ORGANIZATION_NAME: &'static str = "2.5.4.10";
    pub const OID_ORGANIZATIONAL_UNIT_NAME: &'static str = "2.5.4.11";
    pub const OID_DOMAIN_COMPONENT: &'static str = "0.9.2342.19200300.100.1.25";
    pub const OID_EMAIL_ADDRESS: &'static str = "1.2.840.113549.1.9.1";

    pub fn new(attribute_type: ObjectIdentifier, attribute_value: AttributeValue) -> Self {
        Self {
            attribute_type,
            attribute_value,
        }
    }

    /// The value as text, when it was a directory string.
    pub fn value_str(&self) -> Option<&str> {
        match &self.attribute_value {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Other(_) => None,
        }
    }
}

impl OidName for AttributeTypeAndValue {
    fn oid_name(&self) -> Option<&'static str> {
        match self.attribute_type.to_string().as_str() {
            Self::OID_COMMON_NAME => Some("CN"),
            Self::OID_SERIAL_NUMBER => Some("serialNumber"),
            Self::OID_COUNTRY_NAME => Some("C"),
            Self::OID_LOCALITY_NAME => Some("L"),
            Self::OID_STATE_OR_PROVINCE_NAME => Some("ST"),
            Self::OID_ORGANIZATION_NAME => Some("O"),
            Self::OID_ORGANIZATIONAL_UNIT_NAME => Some("OU"),
            Self::OID_DOMAIN_COMPONENT => Some("DC"),
            Self::OID_EMAIL_ADDRESS => Some("emailAddress"),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeTypeAndValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.oid_name() {
            Some(name) => write!(f, "{}={}", name, self.attribute_value),
            None => write!(f, "{}={}", self.attribute_type, self.attribute_value),
        }
    }
}

impl DecodableFrom<Element> for AttributeTypeAndValue {}

impl Decoder<Element, AttributeTypeAndValue> for Element {
    type Error = Error;

    fn decode(&self) -> Result<AttributeTypeAndValue> {
        let Element::Sequence(seq) = self else {
            return Err(Error::AttributeTypeAndValueExpectedSequence);
        };

        match seq.as_slice() {
            [Element::ObjectIdentifier(oid), value] => Ok(AttributeTypeAndValue {
                attribute_type: oid.clone(),
                attribute_value: AttributeValue::from(value),
            }),
            [_, _] => Err(Error::AttributeTypeAndValueExpectedOid),
            _ => Err(Error::AttributeTypeAndValueInvalidElementCount),
        }
    }
}
