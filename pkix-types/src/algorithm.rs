//! AlgorithmIdentifier type
//!
//! Defined in [RFC 5280 Section 4.1.1.2](https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.1.2)

use std::fmt;

use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{Element, ObjectIdentifier};

use crate::OidName;
use crate::error::{Error, Result};

/// Parameters field in AlgorithmIdentifier
///
/// Wrapped in Option:
/// - None: Field not present
/// - Some(AlgorithmParameters::Null): Explicit NULL value (RSA)
/// - Some(AlgorithmParameters::Other(Element)): Any other ASN.1 element, e.g. an EC curve OID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmParameters {
    Null,
    Other(Element),
}

/// Algorithm Identifier
///
/// ```asn1
/// AlgorithmIdentifier ::= SEQUENCE {
///     algorithm   OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY algorithm OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    pub algorithm: ObjectIdentifier,
    pub parameters: Option<AlgorithmParameters>,
}

impl AlgorithmIdentifier {
    pub const OID_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.1";
    pub const OID_SHA1_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.5";
    pub const OID_SHA256_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.11";
    pub const OID_SHA384_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.12";
    pub const OID_SHA512_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.13";
    pub const OID_RSASSA_PSS: &'static str = "1.2.840.113549.1.1.10";
    pub const OID_EC_PUBLIC_KEY: &'static str = "1.2.840.10045.2.1";
    pub const OID_ECDSA_WITH_SHA256: &'static str = "1.2.840.10045.4.3.2";
    pub const OID_ECDSA_WITH_SHA384: &'static str = "1.2.840.10045.4.3.3";
    pub const OID_ECDSA_WITH_SHA512: &'static str = "1.2.840.10045.4.3.4";
    pub const OID_ED25519: &'static str = "1.3.101.112";
    pub const OID_ED448: &'static str = "1.3.101.113";

    pub fn new(algorithm: ObjectIdentifier) -> Self {
        Self {
            algorithm,
            parameters: None,
        }
    }

    pub fn new_with_params(algorithm: ObjectIdentifier, parameters: AlgorithmParameters) -> Self {
        Self {
            algorithm,
            parameters: Some(parameters),
        }
    }

    pub fn algorithm(&self) -> &ObjectIdentifier {
        &self.algorithm
    }

    pub fn parameters(&self) -> Option<&AlgorithmParameters> {
        self.parameters.as_ref()
    }

    pub fn is_rsa_encryption(&self) -> bool {
        self.algorithm == Self::OID_RSA_ENCRYPTION
    }
}

impl OidName for AlgorithmIdentifier {
    fn oid_name(&self) -> Option<&'static str> {
        match self.algorithm.to_string().as_str() {
            Self::OID_RSA_ENCRYPTION => Some("rsaEncryption"),
            Self::OID_SHA1_WITH_RSA_ENCRYPTION => Some("sha1WithRSAEncryption"),
            Self::OID_SHA256_WITH_RSA_ENCRYPTION => Some("sha256WithRSAEncryption"),
            Self::OID_SHA384_WITH_RSA_ENCRYPTION => Some("sha384WithRSAEncryption"),
            Self::OID_SHA512_WITH_RSA_ENCRYPTION => Some("sha512WithRSAEncryption"),
            Self::OID_RSASSA_PSS => Some("rsassaPss"),
            Self::OID_EC_PUBLIC_KEY => Some("id-ecPublicKey"),
            Self::OID_ECDSA_WITH_SHA256 => Some("ecdsa-with-SHA256"),
            Self::OID_ECDSA_WITH_SHA384 => Some("ecdsa-with-SHA384"),
            Self::OID_ECDSA_WITH_SHA512 => Some("ecdsa-with-SHA512"),
            Self::OID_ED25519 => Some("ED25519"),
            Self::OID_ED448 => Some("ED448"),
            _ => None,
        }
    }
}

impl fmt::Display for AlgorithmIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.oid_name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.algorithm),
        }
    }
}

impl DecodableFrom<Element> for AlgorithmIdentifier {}

impl Decoder<Element, AlgorithmIdentifier> for Element {
    type Error = Error;

    fn decode(&self) -> Result<AlgorithmIdentifier> {
        let Element::Sequence(elements) = self else {
            return Err(Error::AlgorithmIdentifierExpectedSequence);
        };

        match elements.as_slice() {
            [Element::ObjectIdentifier(oid)] => Ok(AlgorithmIdentifier::new(oid.clone())),
            [Element::ObjectIdentifier(oid), Element::Null] => Ok(
                AlgorithmIdentifier::new_with_params(oid.clone(), AlgorithmParameters::Null),
            ),
            [Element::ObjectIdentifier(oid), param] => Ok(AlgorithmIdentifier::new_with_params(
                oid.clone(),
                AlgorithmParameters::Other(param.clone()),
            )),
            [_] | [_, _] => Err(Error::AlgorithmIdentifierExpectedOid),
            _ => Err(Error::AlgorithmIdentifierInvalidElementCount(elements.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    fn oid(s: &str) -> ObjectIdentifier {
        ObjectIdentifier::from_str(s).unwrap()
    }

    #[rstest]
    #[case::rsa_with_null(
        Element::Sequence(vec![Element::ObjectIdentifier(oid("1.2.840.113549.1.1.1")), Element::Null]),
        AlgorithmIdentifier::new_with_params(oid("1.2.840.113549.1.1.1"), AlgorithmParameters::Null),
    )]
    #[case::ed25519_without_params(
        Element::Sequence(vec![Element::ObjectIdentifier(oid("1.3.101.112"))]),
        AlgorithmIdentifier::new(oid("1.3.101.112")),
    )]
    #[case::ec_with_curve(
        Element::Sequence(vec![
            Element::ObjectIdentifier(oid("1.2.840.10045.2.1")),
            Element::ObjectIdentifier(oid("1.2.840.10045.3.1.7")),
        ]),
        AlgorithmIdentifier::new_with_params(
            oid("1.2.840.10045.2.1"),
            AlgorithmParameters::Other(Element::ObjectIdentifier(oid("1.2.840.10045.3.1.7"))),
        ),
    )]
    fn test_decode_algorithm_identifier(#[case] input: Element, #[case] expected: AlgorithmIdentifier) {
        let actual: AlgorithmIdentifier = input.decode().unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest]
    #[case::not_sequence(Element::Null, Error::AlgorithmIdentifierExpectedSequence)]
    #[case::empty(Element::Sequence(vec![]), Error::AlgorithmIdentifierInvalidElementCount(0))]
    #[case::oid_missing(Element::Sequence(vec![Element::Null]), Error::AlgorithmIdentifierExpectedOid)]
    #[case::too_many(
        Element::Sequence(vec![Element::Null, Element::Null, Element::Null]),
        Error::AlgorithmIdentifierInvalidElementCount(3),
    )]
    fn test_decode_algorithm_identifier_error(#[case] input: Element, #[case] expected: Error) {
        let result: Result<AlgorithmIdentifier> = input.decode();
        assert_eq!(Err(expected), result);
    }

    #[rstest]
    #[case("1.2.840.113549.1.1.1", "rsaEncryption")]
    #[case("1.2.840.113549.1.1.11", "sha256WithRSAEncryption")]
    #[case("1.2.840.10045.2.1", "id-ecPublicKey")]
    #[case("1.2.3.4", "1.2.3.4")]
    fn test_algorithm_identifier_display(#[case] input: &str, #[case] expected: &str) {
        let alg = AlgorithmIdentifier::new(oid(input));
        assert_eq!(expected, alg.to_string());
    }
}
