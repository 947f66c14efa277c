use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{ASN1Object, BitString, Element, ObjectIdentifier, OctetString};
use kagi_der::Der;
use kagi_pkix_types::AlgorithmIdentifier;

use super::error::{Error, Result};

/*
RFC 5958 - Asymmetric Key Packages

OneAsymmetricKey ::= SEQUENCE {
    version                   Version,
    privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
    privateKey                PrivateKey,
    attributes            [0] Attributes OPTIONAL,
    ...,
    [[2: publicKey        [1] PublicKey OPTIONAL ]],
    ...
}

PrivateKeyInfo ::= OneAsymmetricKey

Version ::= INTEGER { v1(0), v2(1) } (v1, ..., v2)

PrivateKey ::= OCTET STRING

PublicKey ::= BIT STRING

Attributes ::= SET OF Attribute { { OneAsymmetricKeyAttributes } }

Attribute ::= SEQUENCE {
    type      OBJECT IDENTIFIER,
    values    SET SIZE(1..MAX) OF AttributeValue
}
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// Version 1 (no public key)
    V1 = 0,
    /// Version 2 (with public key)
    V2 = 1,
}

impl TryFrom<i64> for Version {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Version::V1),
            1 => Ok(Version::V2),
            _ => Err(Error::InvalidVersion(value)),
        }
    }
}

/// PKCS#8 PrivateKeyInfo
///
/// `private_key` holds the algorithm specific encoding, which for
/// rsaEncryption is a DER PKCS#1 RSAPrivateKey.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKeyInfo {
    pub version: Version,
    pub private_key_algorithm: AlgorithmIdentifier,
    pub private_key: OctetString,
    pub attributes: Option<Vec<Attribute>>,
    pub public_key: Option<BitString>,
}

/// A key attribute. Values are kept undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attribute_type: ObjectIdentifier,
    pub values: Vec<Element>,
}

impl DecodableFrom<Element> for Attribute {}

impl Decoder<Element, Attribute> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Attribute> {
        match self {
            Element::Sequence(fields) => match fields.as_slice() {
                [Element::ObjectIdentifier(oid), Element::Set(values)] => Ok(Attribute {
                    attribute_type: oid.clone(),
                    values: values.clone(),
                }),
                _ => Err(Error::InvalidAttribute(self.to_string())),
            },
            _ => Err(Error::InvalidAttribute(self.to_string())),
        }
    }
}

impl PrivateKeyInfo {
    /// Parses a DER PrivateKeyInfo. The input must hold exactly one structure.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let der: Der = der.decode()?;
        let asn1_obj: ASN1Object = der.decode()?;
        match asn1_obj.elements() {
            [element] => element.decode(),
            [] => Err(Error::EmptyAsn1Object),
            _ => Err(Error::TrailingData),
        }
    }
}

impl std::fmt::Debug for PrivateKeyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKeyInfo")
            .field("version", &self.version)
            .field("private_key_algorithm", &self.private_key_algorithm)
            .field("private_key_len", &self.private_key.as_bytes().len())
            .field("attributes", &self.attributes.as_ref().map(Vec::len))
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl DecodableFrom<Element> for PrivateKeyInfo {}

impl Decoder<Element, PrivateKeyInfo> for Element {
    type Error = Error;

    fn decode(&self) -> Result<PrivateKeyInfo> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        let [version, algorithm, private_key, optional @ ..] = elements.as_slice() else {
            return Err(Error::InvalidElementCount {
                expected: "at least 3",
                actual: elements.len(),
            });
        };

        let Element::Integer(version) = version else {
            return Err(Error::ExpectedVersionInteger);
        };
        let version = version
            .to_i64()
            .ok_or(Error::ExpectedVersionInteger)
            .and_then(Version::try_from)?;

        let private_key_algorithm: AlgorithmIdentifier = algorithm.decode()?;

        let Element::OctetString(private_key) = private_key else {
            return Err(Error::ExpectedPrivateKeyOctetString);
        };

        let mut attributes = None;
        let mut public_key = None;
        for elem in optional {
            match elem {
                // [0] IMPLICIT SET OF Attribute, possibly empty.
                Element::ContextSpecific {
                    slot: 0,
                    constructed: true,
                    elements,
                } if attributes.is_none() && public_key.is_none() => {
                    attributes = Some(
                        elements
                            .iter()
                            .map(|attr| attr.decode())
                            .collect::<Result<Vec<Attribute>>>()?,
                    );
                }
                // [1] IMPLICIT BIT STRING, so the content arrives as raw octets.
                Element::ContextSpecific {
                    slot: 1,
                    constructed: false,
                    elements,
                } if public_key.is_none() => {
                    let [Element::OctetString(raw)] = elements.as_slice() else {
                        return Err(Error::UnexpectedElement(elem.to_string()));
                    };
                    public_key = Some(BitString::try_from(raw.as_bytes())?);
                }
                other => return Err(Error::UnexpectedElement(other.to_string())),
            }
        }
        if public_key.is_some() && version != Version::V2 {
            return Err(Error::PublicKeyRequiresV2);
        }

        Ok(PrivateKeyInfo {
            version,
            private_key_algorithm,
            private_key: private_key.clone(),
            attributes,
            public_key,
        })
    }
}
