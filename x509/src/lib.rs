//! X.509 certificate decoding.
//!
//! Only the fields needed to bind a certificate to a private key are typed;
//! extensions are kept as raw [`Extension`] values.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{ASN1Object, BitString, Element};
use kagi_der::Der;
use kagi_pem::{Label, Pem};
use kagi_pkix_types::{
    AlgorithmIdentifier, CertificateSerialNumber, Extension, Name, SubjectPublicKeyInfo,
};

pub mod error;
#[cfg(feature = "rustls")]
pub mod rustls;

pub use error::{Error, Result};

/*
https://datatracker.ietf.org/doc/html/rfc5280#section-4.1

Certificate  ::=  SEQUENCE  {
    tbsCertificate       TBSCertificate,
    signatureAlgorithm   AlgorithmIdentifier,
    signatureValue       BIT STRING
}
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    der: Vec<u8>,
    tbs_certificate: TBSCertificate,
    signature_algorithm: AlgorithmIdentifier,
    signature_value: BitString,
}

impl Certificate {
    /// Decodes a DER certificate. The input must hold exactly one structure.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let parsed: Der = der.decode()?;
        let asn1_obj: ASN1Object = parsed.decode()?;
        let element = match asn1_obj.elements() {
            [element] => element,
            [] => return Err(Error::EmptyAsn1Object),
            _ => return Err(Error::TrailingData),
        };

        let Element::Sequence(fields) = element else {
            return Err(Error::CertificateExpectedSequence);
        };
        let [tbs, algorithm, signature] = fields.as_slice() else {
            return Err(Error::CertificateInvalidElementCount(fields.len()));
        };

        let tbs_certificate: TBSCertificate = tbs.decode()?;
        let signature_algorithm: AlgorithmIdentifier = algorithm.decode()?;
        let Element::BitString(signature_value) = signature else {
            return Err(Error::CertificateExpectedBitString);
        };

        // RFC 5280 4.1.1.2: both fields MUST contain the same algorithm identifier.
        if signature_algorithm != tbs_certificate.signature {
            return Err(Error::SignatureAlgorithmMismatch {
                outer: signature_algorithm.to_string(),
                inner: tbs_certificate.signature.to_string(),
            });
        }

        Ok(Certificate {
            der: der.to_vec(),
            tbs_certificate,
            signature_algorithm,
            signature_value: signature_value.clone(),
        })
    }

    /// The DER encoding the certificate was decoded from.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    pub fn tbs_certificate(&self) -> &TBSCertificate {
        &self.tbs_certificate
    }

    pub fn signature_algorithm(&self) -> &AlgorithmIdentifier {
        &self.signature_algorithm
    }

    pub fn signature_value(&self) -> &BitString {
        &self.signature_value
    }

    pub fn version(&self) -> Version {
        self.tbs_certificate.version
    }

    pub fn serial_number(&self) -> &CertificateSerialNumber {
        &self.tbs_certificate.serial_number
    }

    pub fn issuer(&self) -> &Name {
        &self.tbs_certificate.issuer
    }

    pub fn subject(&self) -> &Name {
        &self.tbs_certificate.subject
    }

    pub fn validity(&self) -> &Validity {
        &self.tbs_certificate.validity
    }

    pub fn subject_public_key_info(&self) -> &SubjectPublicKeyInfo {
        &self.tbs_certificate.subject_public_key_info
    }

    /// Extensions in encoding order; empty for v1 and v2 certificates.
    pub fn extensions(&self) -> &[Extension] {
        self.tbs_certificate.extensions.as_deref().unwrap_or_default()
    }
}

impl DecodableFrom<Pem> for Certificate {}

impl Decoder<Pem, Certificate> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Certificate> {
        if self.label() != Label::Certificate {
            return Err(Error::Pem(kagi_pem::Error::InvalidLabel));
        }
        let der: Vec<u8> = self.decode()?;
        Certificate::from_der(&der)
    }
}

impl FromStr for Certificate {
    type Err = Error;

    /// Parses the first `CERTIFICATE` block in `s`; text around it is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let pem = Pem::extract(s, Label::Certificate)?
            .ok_or(kagi_pem::Error::MissingPreEncapsulationBoundary)?;
        pem.decode()
    }
}

/// Loads a PEM certificate from the raw contents of a certificate file.
///
/// DER certificates are not accepted. Bytes that are not UTF-8 are replaced
/// before the markers are searched for, so binary input fails as missing PEM.
pub fn load_certificate(bytes: &[u8]) -> Result<Certificate> {
    String::from_utf8_lossy(bytes).parse()
}

/*
TBSCertificate  ::=  SEQUENCE  {
     version         [0]  EXPLICIT Version DEFAULT v1,
     serialNumber         CertificateSerialNumber,
     signature            AlgorithmIdentifier,
     issuer               Name,
     validity             Validity,
     subject              Name,
     subjectPublicKeyInfo SubjectPublicKeyInfo,
     issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
                          -- If present, version MUST be v2 or v3
     subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
                          -- If present, version MUST be v2 or v3
     extensions      [3]  EXPLICIT Extensions OPTIONAL
                          -- If present, version MUST be v3
}
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TBSCertificate {
    pub version: Version,
    pub serial_number: CertificateSerialNumber,
    pub signature: AlgorithmIdentifier,
    pub issuer: Name,
    pub validity: Validity,
    pub subject: Name,
    pub subject_public_key_info: SubjectPublicKeyInfo,
    pub issuer_unique_id: Option<BitString>,
    pub subject_unique_id: Option<BitString>,
    pub extensions: Option<Vec<Extension>>,
}

impl DecodableFrom<Element> for TBSCertificate {}

impl Decoder<Element, TBSCertificate> for Element {
    type Error = Error;

    fn decode(&self) -> Result<TBSCertificate> {
        let Element::Sequence(elements) = self else {
            return Err(Error::TbsExpectedSequence);
        };

        let (version, rest) = match elements.as_slice() {
            [
                Element::ContextSpecific {
                    slot: 0,
                    constructed: true,
                    elements: explicit,
                },
                rest @ ..,
            ] => {
                let [element] = explicit.as_slice() else {
                    return Err(Error::ExplicitTagInvalidElementCount {
                        slot: 0,
                        count: explicit.len(),
                    });
                };
                let version: Version = element.decode()?;
                (version, rest)
            }
            rest => (Version::V1, rest),
        };

        let [
            serial_number,
            signature,
            issuer,
            validity,
            subject,
            subject_public_key_info,
            optional @ ..,
        ] = rest
        else {
            return Err(Error::TbsInvalidElementCount(elements.len()));
        };

        let serial_number: CertificateSerialNumber = serial_number.decode()?;
        let signature: AlgorithmIdentifier = signature.decode()?;
        let issuer: Name = issuer.decode()?;
        let validity: Validity = validity.decode()?;
        let subject: Name = subject.decode()?;
        let subject_public_key_info: SubjectPublicKeyInfo = subject_public_key_info.decode()?;

        let mut issuer_unique_id = None;
        let mut subject_unique_id = None;
        let mut extensions = None;
        for elem in optional {
            match elem {
                Element::ContextSpecific {
                    slot: 1,
                    constructed: false,
                    elements,
                } if issuer_unique_id.is_none()
                    && subject_unique_id.is_none()
                    && extensions.is_none() =>
                {
                    issuer_unique_id = Some(unique_identifier(elem, elements)?);
                }
                Element::ContextSpecific {
                    slot: 2,
                    constructed: false,
                    elements,
                } if subject_unique_id.is_none() && extensions.is_none() => {
                    subject_unique_id = Some(unique_identifier(elem, elements)?);
                }
                Element::ContextSpecific {
                    slot: 3,
                    constructed: true,
                    elements: explicit,
                } if extensions.is_none() => {
                    let [element] = explicit.as_slice() else {
                        return Err(Error::ExplicitTagInvalidElementCount {
                            slot: 3,
                            count: explicit.len(),
                        });
                    };
                    let Element::Sequence(items) = element else {
                        return Err(Error::ExtensionsExpectedSequence);
                    };
                    extensions = Some(
                        items
                            .iter()
                            .map(|item| item.decode())
                            .collect::<std::result::Result<Vec<Extension>, _>>()?,
                    );
                }
                other => return Err(Error::TbsUnexpectedElement(other.to_string())),
            }
        }

        if (issuer_unique_id.is_some() || subject_unique_id.is_some()) && version == Version::V1 {
            return Err(Error::UniqueIdentifierRequiresV2);
        }
        if extensions.is_some() && version != Version::V3 {
            return Err(Error::ExtensionsRequireV3);
        }

        Ok(TBSCertificate {
            version,
            serial_number,
            signature,
            issuer,
            validity,
            subject,
            subject_public_key_info,
            issuer_unique_id,
            subject_unique_id,
            extensions,
        })
    }
}

// UniqueIdentifier is an IMPLICIT BIT STRING, so the content arrives as raw octets.
fn unique_identifier(tagged: &Element, content: &[Element]) -> Result<BitString> {
    let [Element::OctetString(raw)] = content else {
        return Err(Error::TbsUnexpectedElement(tagged.to_string()));
    };
    Ok(BitString::try_from(raw.as_bytes())?)
}

// https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Version {
    V1 = 0,
    V2 = 1,
    V3 = 2,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = *self as u8;
        write!(f, "{} (0x{:x})", value + 1, value)
    }
}

impl DecodableFrom<Element> for Version {}

impl Decoder<Element, Version> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Version> {
        let Element::Integer(value) = self else {
            return Err(Error::VersionExpectedInteger);
        };
        match value.to_i64() {
            Some(0) => Ok(Version::V1),
            Some(1) => Ok(Version::V2),
            Some(2) => Ok(Version::V3),
            _ => Err(Error::UnsupportedVersion(value.as_bigint().to_string())),
        }
    }
}

/*
Validity ::= SEQUENCE {
     notBefore      Time,
     notAfter       Time
}

Time ::= CHOICE {
     utcTime        UTCTime,
     generalTime    GeneralizedTime
}
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub not_before: NaiveDateTime,
    pub not_after: NaiveDateTime,
}

impl DecodableFrom<Element> for Validity {}

impl Decoder<Element, Validity> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Validity> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ValidityExpectedSequence);
        };
        let [not_before, not_after] = elements.as_slice() else {
            return Err(Error::ValidityInvalidElementCount(elements.len()));
        };
        Ok(Validity {
            not_before: time(not_before).ok_or(Error::ValidityExpectedTime("notBefore"))?,
            not_after: time(not_after).ok_or(Error::ValidityExpectedTime("notAfter"))?,
        })
    }
}

fn time(element: &Element) -> Option<NaiveDateTime> {
    match element {
        Element::UTCTime(dt) | Element::GeneralizedTime(dt) => Some(*dt),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use kagi_asn1::{Integer, ObjectIdentifier, OctetString};
    use rstest::rstest;

    use super::*;

    const SERVER_CRT: &str = include_str!("../../testdata/server.crt");
    const SERVER_KEY: &str = include_str!("../../testdata/server.key");

    fn server_der() -> Vec<u8> {
        let pem = Pem::extract(SERVER_CRT, Label::Certificate)
            .unwrap()
            .unwrap();
        pem.decode().unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn sha256_with_rsa() -> Element {
        Element::Sequence(vec![
            Element::ObjectIdentifier(
                ObjectIdentifier::from_str(AlgorithmIdentifier::OID_SHA256_WITH_RSA_ENCRYPTION)
                    .unwrap(),
            ),
            Element::Null,
        ])
    }

    fn validity_element() -> Element {
        Element::Sequence(vec![
            Element::UTCTime(datetime(2026, 10, 15, 1, 57, 52)),
            Element::GeneralizedTime(datetime(2056, 10, 15, 1, 57, 52)),
        ])
    }

    fn spki_element() -> Element {
        Element::Sequence(vec![
            Element::Sequence(vec![
                Element::ObjectIdentifier(
                    ObjectIdentifier::from_str(AlgorithmIdentifier::OID_RSA_ENCRYPTION).unwrap(),
                ),
                Element::Null,
            ]),
            Element::BitString(BitString::new(0, vec![0x30, 0x00])),
        ])
    }

    fn tbs_element(version: Option<i64>, optional: Vec<Element>) -> Element {
        let mut elements = Vec::new();
        if let Some(v) = version {
            elements.push(Element::ContextSpecific {
                slot: 0,
                constructed: true,
                elements: vec![Element::Integer(Integer::from(v))],
            });
        }
        elements.extend([
            Element::Integer(Integer::from(1i64)),
            sha256_with_rsa(),
            Element::Sequence(vec![]),
            validity_element(),
            Element::Sequence(vec![]),
            spki_element(),
        ]);
        elements.extend(optional);
        Element::Sequence(elements)
    }

    fn unique_id(slot: u8) -> Element {
        Element::ContextSpecific {
            slot,
            constructed: false,
            elements: vec![Element::OctetString(OctetString::from(vec![0x00, 0x01]))],
        }
    }

    fn extensions() -> Element {
        Element::ContextSpecific {
            slot: 3,
            constructed: true,
            elements: vec![Element::Sequence(vec![Element::Sequence(vec![
                Element::ObjectIdentifier(
                    ObjectIdentifier::from_str(Extension::OID_BASIC_CONSTRAINTS).unwrap(),
                ),
                Element::Boolean(true),
                Element::OctetString(OctetString::from(vec![0x30, 0x00])),
            ])])],
        }
    }

    #[test]
    fn test_load_server_certificate() {
        let cert = load_certificate(SERVER_CRT.as_bytes()).unwrap();

        assert_eq!(Version::V3, cert.version());
        assert_eq!(
            "3a:b5:aa:dd:6a:db:a5:17:30:8b:1a:54:6b:51:49:4e:55:38:d9:8f",
            cert.serial_number().format_hex()
        );
        assert_eq!("C=JP, O=Kagi Project, CN=localhost", cert.subject().to_string());
        assert_eq!(cert.subject(), cert.issuer());
        assert_eq!(Some("localhost"), cert.subject().common_name());
        assert_eq!(
            Validity {
                not_before: datetime(2026, 10, 15, 1, 57, 52),
                not_after: datetime(2036, 10, 12, 1, 57, 52),
            },
            *cert.validity()
        );
        assert_eq!("sha256WithRSAEncryption", cert.signature_algorithm().to_string());
        assert!(cert.subject_public_key_info().algorithm().is_rsa_encryption());
        assert_eq!(3, cert.extensions().len());
        let basic_constraints = cert
            .extensions()
            .iter()
            .find(|ext| *ext.oid() == Extension::OID_BASIC_CONSTRAINTS)
            .unwrap();
        assert!(basic_constraints.is_critical());
        assert_eq!(2048, cert.signature_value().bit_len());
        assert_eq!(server_der(), cert.der());
    }

    #[test]
    fn test_pem_and_der_decode_identically() {
        let from_pem: Certificate = SERVER_CRT.parse().unwrap();
        let from_der = Certificate::from_der(&server_der()).unwrap();
        assert_eq!(from_pem, from_der);
    }

    #[rstest]
    #[case::no_markers(b"not a certificate".as_slice(), kagi_pem::Error::MissingPreEncapsulationBoundary)]
    #[case::key_markers(SERVER_KEY.as_bytes(), kagi_pem::Error::MissingPreEncapsulationBoundary)]
    #[case::missing_footer(
        b"-----BEGIN CERTIFICATE-----\nMIIB\n".as_slice(),
        kagi_pem::Error::MissingPostEncapsulationBoundary
    )]
    #[case::footer_before_header(
        b"-----END CERTIFICATE-----\nMIIB\n-----BEGIN CERTIFICATE-----\n".as_slice(),
        kagi_pem::Error::MissingPostEncapsulationBoundary
    )]
    #[case::empty_payload(
        b"-----BEGIN CERTIFICATE-----\n-----END CERTIFICATE-----\n".as_slice(),
        kagi_pem::Error::MissingData
    )]
    fn test_load_certificate_pem_error(#[case] input: &[u8], #[case] expected: kagi_pem::Error) {
        assert_eq!(Err(Error::Pem(expected)), load_certificate(input));
    }

    #[test]
    fn test_load_certificate_invalid_base64() {
        let input = b"-----BEGIN CERTIFICATE-----\n!!!!\n-----END CERTIFICATE-----\n";
        assert!(matches!(
            load_certificate(input),
            Err(Error::Pem(kagi_pem::Error::Base64Decode(_)))
        ));
    }

    #[test]
    fn test_load_certificate_der_is_rejected() {
        let result = load_certificate(&server_der());
        assert_eq!(
            Err(Error::Pem(kagi_pem::Error::MissingPreEncapsulationBoundary)),
            result
        );
    }

    #[test]
    fn test_key_framed_as_certificate() {
        let body = SERVER_KEY
            .replace(Label::RSAPrivateKey.header(), Label::Certificate.header())
            .replace(Label::RSAPrivateKey.footer(), Label::Certificate.footer());
        assert_eq!(
            Err(Error::CertificateInvalidElementCount(9)),
            load_certificate(body.as_bytes())
        );
    }

    #[test]
    fn test_random_bytes_framed_as_certificate() {
        let input = b"-----BEGIN CERTIFICATE-----\nq83vASNFZ4k=\n-----END CERTIFICATE-----\n";
        let result = load_certificate(input);
        assert!(result.is_err());
        assert!(!matches!(result, Err(Error::Pem(_))));
    }

    #[test]
    fn test_signature_algorithm_mismatch() {
        let mut der = server_der();
        // Last OID byte of the outer signatureAlgorithm: sha256 (0x0b) -> sha384 (0x0c).
        assert_eq!(0x0b, der[589]);
        der[589] = 0x0c;
        assert_eq!(
            Err(Error::SignatureAlgorithmMismatch {
                outer: "sha384WithRSAEncryption".to_string(),
                inner: "sha256WithRSAEncryption".to_string(),
            }),
            Certificate::from_der(&der)
        );
    }

    #[rstest]
    #[case::empty(vec![], Error::EmptyAsn1Object)]
    #[case::trailing(vec![0x05, 0x00, 0x05, 0x00], Error::TrailingData)]
    #[case::not_sequence(vec![0x05, 0x00], Error::CertificateExpectedSequence)]
    fn test_from_der_error(#[case] input: Vec<u8>, #[case] expected: Error) {
        assert_eq!(Err(expected), Certificate::from_der(&input));
    }

    #[test]
    fn test_from_der_trailing_bytes_after_certificate() {
        let mut der = server_der();
        der.extend([0x05, 0x00]);
        assert_eq!(Err(Error::TrailingData), Certificate::from_der(&der));
    }

    #[rstest]
    #[case::v1_default(tbs_element(None, vec![]), Version::V1)]
    #[case::v1_explicit(tbs_element(Some(0), vec![]), Version::V1)]
    #[case::v2_unique_ids(tbs_element(Some(1), vec![unique_id(1), unique_id(2)]), Version::V2)]
    #[case::v3_extensions(tbs_element(Some(2), vec![unique_id(2), extensions()]), Version::V3)]
    fn test_decode_tbs_certificate(#[case] input: Element, #[case] expected: Version) {
        let tbs: TBSCertificate = input.decode().unwrap();
        assert_eq!(expected, tbs.version);
        assert_eq!(Some(1), tbs.serial_number.as_integer().to_i64());
    }

    #[test]
    fn test_decode_tbs_unique_id_is_bit_string() {
        let tbs: TBSCertificate = tbs_element(Some(1), vec![unique_id(1)]).decode().unwrap();
        assert_eq!(Some(BitString::new(0, vec![0x01])), tbs.issuer_unique_id);
        assert_eq!(None, tbs.subject_unique_id);
        assert_eq!(None, tbs.extensions);
    }

    #[rstest]
    #[case::not_sequence(Element::Null, Error::TbsExpectedSequence)]
    #[case::too_few(Element::Sequence(vec![Element::Integer(Integer::from(1i64))]), Error::TbsInvalidElementCount(1))]
    #[case::unsupported_version(tbs_element(Some(3), vec![]), Error::UnsupportedVersion("3".to_string()))]
    #[case::unique_id_in_v1(tbs_element(None, vec![unique_id(1)]), Error::UniqueIdentifierRequiresV2)]
    #[case::extensions_in_v2(tbs_element(Some(1), vec![extensions()]), Error::ExtensionsRequireV3)]
    #[case::out_of_order(
        tbs_element(Some(2), vec![extensions(), unique_id(1)]),
        Error::TbsUnexpectedElement(unique_id(1).to_string())
    )]
    #[case::duplicate_extensions(
        tbs_element(Some(2), vec![extensions(), extensions()]),
        Error::TbsUnexpectedElement(extensions().to_string())
    )]
    #[case::trailing_null(tbs_element(Some(2), vec![Element::Null]), Error::TbsUnexpectedElement("Null".to_string()))]
    #[case::empty_explicit_version(
        Element::Sequence(vec![Element::ContextSpecific { slot: 0, constructed: true, elements: vec![] }]),
        Error::ExplicitTagInvalidElementCount { slot: 0, count: 0 }
    )]
    #[case::explicit_extensions_with_two_elements(
        tbs_element(Some(2), vec![Element::ContextSpecific {
            slot: 3,
            constructed: true,
            elements: vec![Element::Sequence(vec![]), Element::Sequence(vec![])],
        }]),
        Error::ExplicitTagInvalidElementCount { slot: 3, count: 2 }
    )]
    fn test_decode_tbs_certificate_error(#[case] input: Element, #[case] expected: Error) {
        let result: Result<TBSCertificate> = input.decode();
        assert_eq!(Err(expected), result);
    }

    #[rstest]
    #[case::utc_and_generalized(validity_element(), datetime(2056, 10, 15, 1, 57, 52))]
    #[case::both_utc(
        Element::Sequence(vec![
            Element::UTCTime(datetime(2026, 10, 15, 1, 57, 52)),
            Element::UTCTime(datetime(2036, 10, 12, 1, 57, 52)),
        ]),
        datetime(2036, 10, 12, 1, 57, 52)
    )]
    fn test_decode_validity(#[case] input: Element, #[case] not_after: NaiveDateTime) {
        let validity: Validity = input.decode().unwrap();
        assert_eq!(datetime(2026, 10, 15, 1, 57, 52), validity.not_before);
        assert_eq!(not_after, validity.not_after);
    }

    #[rstest]
    #[case::not_sequence(Element::Null, Error::ValidityExpectedSequence)]
    #[case::one_time(
        Element::Sequence(vec![Element::UTCTime(datetime(2026, 1, 1, 0, 0, 0))]),
        Error::ValidityInvalidElementCount(1)
    )]
    #[case::not_before_not_time(
        Element::Sequence(vec![Element::Null, Element::UTCTime(datetime(2026, 1, 1, 0, 0, 0))]),
        Error::ValidityExpectedTime("notBefore")
    )]
    #[case::not_after_not_time(
        Element::Sequence(vec![Element::UTCTime(datetime(2026, 1, 1, 0, 0, 0)), Element::Null]),
        Error::ValidityExpectedTime("notAfter")
    )]
    fn test_decode_validity_error(#[case] input: Element, #[case] expected: Error) {
        let result: Result<Validity> = input.decode();
        assert_eq!(Err(expected), result);
    }

    #[rstest]
    #[case(Version::V1, "1 (0x0)")]
    #[case(Version::V3, "3 (0x2)")]
    fn test_version_display(#[case] version: Version, #[case] expected: &str) {
        assert_eq!(expected, version.to_string());
    }

    #[test]
    fn test_pem_with_wrong_label_is_rejected() {
        let pem = Pem::from_bytes(Label::PrivateKey, &server_der());
        let result: Result<Certificate> = pem.decode();
        assert_eq!(Err(Error::Pem(kagi_pem::Error::InvalidLabel)), result);
    }
}
