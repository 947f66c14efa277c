//! Subject Public Key Info
//!
//! RFC 5280 Section 4.1.2.7
//!
//! ```asn1
//! SubjectPublicKeyInfo  ::=  SEQUENCE  {
//!     algorithm            AlgorithmIdentifier,
//!     subjectPublicKey     BIT STRING
//! }
//! ```

use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{BitString, Element};

use crate::OidName;
use crate::algorithm::AlgorithmIdentifier;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPublicKeyInfo {
    algorithm: AlgorithmIdentifier,
    subject_public_key: BitString,
}

impl SubjectPublicKeyInfo {
    pub fn new(algorithm: AlgorithmIdentifier, subject_public_key: BitString) -> Self {
        Self {
            algorithm,
            subject_public_key,
        }
    }

    pub fn algorithm(&self) -> &AlgorithmIdentifier {
        &self.algorithm
    }

    /// The raw public key. For RSA this is a DER RSAPublicKey.
    pub fn subject_public_key(&self) -> &BitString {
        &self.subject_public_key
    }
}

impl DecodableFrom<Element> for SubjectPublicKeyInfo {}

impl Decoder<Element, SubjectPublicKeyInfo> for Element {
    type Error = Error;

    fn decode(&self) -> Result<SubjectPublicKeyInfo> {
        let Element::Sequence(elements) = self else {
            return Err(Error::SubjectPublicKeyInfoExpectedSequence);
        };

        let [algorithm, public_key] = elements.as_slice() else {
            return Err(Error::SubjectPublicKeyInfoInvalidElementCount(
                elements.len(),
            ));
        };
        let algorithm: AlgorithmIdentifier = algorithm.decode()?;
        let Element::BitString(subject_public_key) = public_key else {
            return Err(Error::SubjectPublicKeyInfoExpectedBitString);
        };

        Ok(SubjectPublicKeyInfo {
            algorithm,
            subject_public_key: subject_public_key.clone(),
        })
    }
}

impl OidName for SubjectPublicKeyInfo {
    fn oid_name(&self) -> Option<&'static str> {
        self.algorithm.oid_name()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use kagi_asn1::{ObjectIdentifier, OctetString};

    use super::*;

    fn rsa_algorithm() -> Element {
        Element::Sequence(vec![
            Element::ObjectIdentifier(ObjectIdentifier::from_str("1.2.840.113549.1.1.1").unwrap()),
            Element::Null,
        ])
    }

    #[test]
    fn test_decode_subject_public_key_info() {
        let public_key = BitString::new(0, vec![0x30, 0x06, 0x02, 0x01, 0x05, 0x02, 0x01, 0x03]);
        let element = Element::Sequence(vec![rsa_algorithm(), Element::BitString(public_key.clone())]);

        let spki: SubjectPublicKeyInfo = element.decode().unwrap();
        assert!(spki.algorithm().is_rsa_encryption());
        assert_eq!(&public_key, spki.subject_public_key());
        assert_eq!(Some("rsaEncryption"), spki.oid_name());
    }

    #[test]
    fn test_decode_invalid_sequence_length() {
        let element = Element::Sequence(vec![rsa_algorithm()]);
        let result: Result<SubjectPublicKeyInfo> = element.decode();
        assert_eq!(Err(Error::SubjectPublicKeyInfoInvalidElementCount(1)), result);
    }

    #[test]
    fn test_decode_invalid_public_key_type() {
        let element = Element::Sequence(vec![
            rsa_algorithm(),
            Element::OctetString(OctetString::from(vec![1, 2, 3])),
        ]);
        let result: Result<SubjectPublicKeyInfo> = element.decode();
        assert_eq!(Err(Error::SubjectPublicKeyInfoExpectedBitString), result);
    }
}
