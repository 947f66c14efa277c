use std::{fmt::Display, str::FromStr};

use chrono::NaiveDateTime;
use error::Error;
use kagi::decoder::{DecodableFrom, Decoder};
use kagi_der::{Der, PrimitiveTag, Tag, Tlv};
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

pub mod error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ASN1Object {
    elements: Vec<Element>,
}

impl ASN1Object {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn new(elements: Vec<Element>) -> Self {
        ASN1Object { elements }
    }
}

impl DecodableFrom<Der> for ASN1Object {}

impl Decoder<Der, ASN1Object> for Der {
    type Error = Error;

    fn decode(&self) -> Result<ASN1Object> {
        let elements = self
            .elements()
            .iter()
            .map(Element::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(ASN1Object { elements })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Boolean(bool),
    Integer(Integer),
    BitString(BitString),
    OctetString(OctetString),
    Null,
    ObjectIdentifier(ObjectIdentifier),
    UTF8String(String),
    Sequence(Vec<Element>),
    Set(Vec<Element>),
    PrintableString(String),
    IA5String(String),
    UTCTime(NaiveDateTime),
    GeneralizedTime(NaiveDateTime),
    /// A `[slot]` tagged value.
    ///
    /// Constructed content keeps every inner element: an EXPLICIT tag holds
    /// one, an IMPLICIT `SET OF` or `SEQUENCE OF` any number. Primitive
    /// content is IMPLICIT and arrives as a single raw [`OctetString`].
    ContextSpecific {
        slot: u8,
        constructed: bool,
        elements: Vec<Element>,
    },
    Unimplemented(Tlv),
}

impl TryFrom<&Tlv> for Element {
    type Error = Error;

    fn try_from(tlv: &Tlv) -> Result<Self> {
        match tlv.tag() {
            Tag::Primitive(primitive_tag, _) => match primitive_tag {
                PrimitiveTag::Boolean => match tlv.data() {
                    Some([0x00]) => Ok(Element::Boolean(false)),
                    Some([0xff]) => Ok(Element::Boolean(true)),
                    _ => Err(Error::InvalidBoolean),
                },
                PrimitiveTag::Integer => match tlv.data() {
                    Some(data) if !data.is_empty() => Ok(Element::Integer(Integer::from(data))),
                    _ => Err(Error::IntegerNoData),
                },
                PrimitiveTag::BitString => {
                    let data = tlv.data().ok_or(Error::BitStringNoData)?;
                    Ok(Element::BitString(BitString::try_from(data)?))
                }
                PrimitiveTag::OctetString => Ok(Element::OctetString(OctetString::from(
                    tlv.data().unwrap_or_default(),
                ))),
                PrimitiveTag::Null => Ok(Element::Null),
                PrimitiveTag::ObjectIdentifier => {
                    let data = tlv.data().ok_or(Error::ObjectIdentifierNoData)?;
                    Ok(Element::ObjectIdentifier(ObjectIdentifier::try_from(data)?))
                }
                PrimitiveTag::UTF8String => {
                    let s = std::str::from_utf8(tlv.data().unwrap_or_default())
                        .map_err(|_| Error::Utf8StringInvalidUtf8)?;
                    Ok(Element::UTF8String(s.to_string()))
                }
                PrimitiveTag::PrintableString => {
                    let s = ascii_string(tlv.data().unwrap_or_default())
                        .ok_or(Error::PrintableStringInvalidEncoding)?;
                    Ok(Element::PrintableString(s))
                }
                PrimitiveTag::IA5String => {
                    let s = ascii_string(tlv.data().unwrap_or_default())
                        .ok_or(Error::Ia5StringInvalidEncoding)?;
                    Ok(Element::IA5String(s))
                }
                PrimitiveTag::Sequence => Ok(Element::Sequence(nested(tlv)?)),
                PrimitiveTag::Set => Ok(Element::Set(nested(tlv)?)),
                PrimitiveTag::UTCTime => {
                    let data = tlv.data().ok_or(Error::UtcTimeInvalidFormat)?;
                    Ok(Element::UTCTime(parse_utc_time(data)?))
                }
                PrimitiveTag::GeneralizedTime => {
                    let data = tlv.data().ok_or(Error::GeneralizedTimeInvalidFormat)?;
                    Ok(Element::GeneralizedTime(parse_generalized_time(data)?))
                }
                PrimitiveTag::Unimplemented(_) => Ok(Element::Unimplemented(tlv.clone())),
            },
            Tag::ContextSpecific { slot, constructed } => {
                let elements = if *constructed {
                    nested(tlv)?
                } else {
                    vec![Element::OctetString(OctetString::from(
                        tlv.data().unwrap_or_default(),
                    ))]
                };
                Ok(Element::ContextSpecific {
                    slot: *slot,
                    constructed: *constructed,
                    elements,
                })
            }
        }
    }
}

fn nested(tlv: &Tlv) -> Result<Vec<Element>> {
    tlv.tlvs()
        .unwrap_or_default()
        .iter()
        .map(Element::try_from)
        .collect()
}

fn ascii_string(data: &[u8]) -> Option<String> {
    data.is_ascii()
        .then(|| String::from_utf8_lossy(data).into_owned())
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Boolean(b) => write!(f, "Boolean({})", b),
            Element::Integer(i) => write!(f, "Integer({})", i),
            Element::BitString(bs) => write!(f, "BitString({} bits)", bs.bit_len()),
            Element::OctetString(os) => write!(f, "OctetString({})", os),
            Element::Null => write!(f, "Null"),
            Element::ObjectIdentifier(oid) => write!(f, "ObjectIdentifier({})", oid),
            Element::UTF8String(s) => write!(f, "UTF8String({})", s),
            Element::Sequence(seq) => write!(f, "Sequence({} elements)", seq.len()),
            Element::Set(set) => write!(f, "Set({} elements)", set.len()),
            Element::PrintableString(s) => write!(f, "PrintableString({})", s),
            Element::IA5String(s) => write!(f, "IA5String({})", s),
            Element::UTCTime(dt) => write!(f, "UTCTime({})", dt),
            Element::GeneralizedTime(dt) => write!(f, "GeneralizedTime({})", dt),
            Element::ContextSpecific {
                slot,
                constructed,
                elements,
            } => write!(
                f,
                "ContextSpecific(slot: {}, constructed: {}, {} elements)",
                slot,
                constructed,
                elements.len()
            ),
            Element::Unimplemented(tlv) => write!(f, "Unimplemented({:?})", tlv.tag()),
        }
    }
}

// ASN.1 INTEGER may be negative and arbitrarily large.
// RSA moduli and certificate serials are both read through this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    /// Returns a reference to the inner BigInt
    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }

    /// Minimal two's complement big-endian encoding, as it appears in DER.
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        self.inner.to_signed_bytes_be()
    }

    /// Number of significant bits of the absolute value.
    pub fn bits(&self) -> u64 {
        self.inner.bits()
    }

    pub fn is_positive(&self) -> bool {
        self.inner.sign() == Sign::Plus
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.inner.to_i64()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.inner.to_u64()
    }
}

impl From<&[u8]> for Integer {
    fn from(value: &[u8]) -> Self {
        Integer {
            inner: BigInt::from_signed_bytes_be(value),
        }
    }
}

impl From<BigInt> for Integer {
    fn from(inner: BigInt) -> Self {
        Integer { inner }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            inner: BigInt::from(value),
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl ObjectIdentifier {
    pub fn arcs(&self) -> &[u64] {
        &self.inner
    }
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::ObjectIdentifierNoData);
        }

        let mut subidentifiers = Vec::new();
        let mut val = 0u64;
        let mut pending = false;
        for v in value {
            val = val
                .checked_mul(0x80)
                .ok_or(Error::ObjectIdentifierArcOverflow)?
                | (*v & 0x7f) as u64;
            pending = *v & 0x80 != 0;
            if !pending {
                subidentifiers.push(val);
                val = 0;
            }
        }
        if pending {
            return Err(Error::ObjectIdentifierIncompleteEncoding);
        }

        // The first subidentifier packs the first two arcs as X * 40 + Y.
        let mut inner = Vec::with_capacity(subidentifiers.len() + 1);
        let first = subidentifiers[0];
        match first {
            0..40 => inner.extend([0, first]),
            40..80 => inner.extend([1, first - 40]),
            _ => inner.extend([2, first - 80]),
        }
        inner.extend_from_slice(&subidentifiers[1..]);
        Ok(ObjectIdentifier { inner })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .inner
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", s)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .split('.')
            .map(|c| {
                c.parse::<u64>()
                    .map_err(|_| Error::ObjectIdentifierInvalidComponent(c.to_string()))
            })
            .collect::<Result<Vec<u64>>>()?;
        if inner.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents);
        }
        Ok(ObjectIdentifier { inner })
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        *self == other.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    pub fn new(unused: u8, data: Vec<u8>) -> Self {
        BitString { unused, data }
    }

    /// Returns the number of unused bits in the last byte
    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the total number of bits (excluding unused bits)
    pub fn bit_len(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len() * 8 - self.unused as usize
        }
    }
}

impl AsRef<[u8]> for BitString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let (&unused, data) = value.split_first().ok_or(Error::BitStringNoData)?;
        if unused > 7 || (data.is_empty() && unused != 0) {
            return Err(Error::BitStringUnusedBitsOutOfRange(unused));
        }
        Ok(BitString {
            unused,
            data: data.to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetString {
    inner: Vec<u8>,
}

impl OctetString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(value: Vec<u8>) -> Self {
        OctetString { inner: value }
    }
}

impl From<&[u8]> for OctetString {
    fn from(value: &[u8]) -> Self {
        OctetString {
            inner: value.to_vec(),
        }
    }
}

/// Decodes the content of an OCTET STRING as nested DER, as PKCS#8 does
/// for the wrapped private key.
impl TryFrom<&OctetString> for ASN1Object {
    type Error = Error;

    fn try_from(value: &OctetString) -> Result<Self> {
        let der: Der = value.as_bytes().decode()?;
        der.decode()
    }
}

impl Display for OctetString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.inner {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

// UTCTime is YYMMDDHHMMSSZ. Years 50-99 are 19YY and 00-49 are 20YY.
fn parse_utc_time(data: &[u8]) -> Result<NaiveDateTime> {
    let s = std::str::from_utf8(data).map_err(|_| Error::UtcTimeInvalidFormat)?;
    if s.len() != 13 || !s.is_ascii() {
        return Err(Error::UtcTimeInvalidFormat);
    }
    let (yy, rest) = s.split_at(2);
    let yy = yy.parse::<u16>().map_err(|_| Error::UtcTimeInvalidFormat)?;
    let year = if yy >= 50 { 1900 + yy } else { 2000 + yy };
    NaiveDateTime::parse_from_str(&format!("{year}{rest}"), "%Y%m%d%H%M%SZ")
        .map_err(|_| Error::UtcTimeInvalidFormat)
}

fn parse_generalized_time(data: &[u8]) -> Result<NaiveDateTime> {
    let s = std::str::from_utf8(data).map_err(|_| Error::GeneralizedTimeInvalidFormat)?;
    NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M%SZ")
        .map_err(|_| Error::GeneralizedTimeInvalidFormat)
}
