//! DER TLV parser.
//!
//! Only the parts of X.690 that certificates and PKCS#1/PKCS#8 keys need are
//! accepted: universal and context-specific tags with low tag numbers, and
//! definite lengths of up to four length octets. Long-form lengths that
//! could have been written in short form are accepted, because hand-built
//! PKCS#8 headers always use the two-octet form.

use kagi::decoder::{DecodableFrom, Decoder};
use nom::{IResult, Parser};

pub mod error;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const TAG_CONSTRUCTED: u8 = 0x20;
const TAG_CLASS_MASK: u8 = 0xc0;
const TAG_CLASS_CONTEXT_SPECIFIC: u8 = 0x80;
const TAG_NUMBER_MASK: u8 = 0x1f;
const MAX_LENGTH_OCTETS: u8 = 4;
const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Der {
    elements: Vec<Tlv>,
}

impl Der {
    pub fn new(elements: Vec<Tlv>) -> Self {
        Der { elements }
    }

    pub fn elements(&self) -> &[Tlv] {
        &self.elements
    }
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der> {
        self.as_slice().decode()
    }
}

impl DecodableFrom<&[u8]> for Der {}

impl Decoder<&[u8], Der> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der> {
        let mut input = *self;
        let mut elements = Vec::new();
        while !input.is_empty() {
            let (rest, tlv) = parse_tlv(input, 0)?;
            input = rest;
            elements.push(tlv);
        }
        Ok(Der { elements })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    UTF8String,
    Sequence,
    Set,
    PrintableString,
    IA5String,
    UTCTime,
    GeneralizedTime,
    Unimplemented(u8),
}

impl From<u8> for PrimitiveTag {
    fn from(value: u8) -> Self {
        match value {
            0x01 => Self::Boolean,
            0x02 => Self::Integer,
            0x03 => Self::BitString,
            0x04 => Self::OctetString,
            0x05 => Self::Null,
            0x06 => Self::ObjectIdentifier,
            0x0c => Self::UTF8String,
            0x30 => Self::Sequence,
            0x31 => Self::Set,
            0x13 => Self::PrintableString,
            0x16 => Self::IA5String,
            0x17 => Self::UTCTime,
            0x18 => Self::GeneralizedTime,
            _ => Self::Unimplemented(value),
        }
    }
}

impl From<&PrimitiveTag> for u8 {
    fn from(tag: &PrimitiveTag) -> Self {
        match tag {
            PrimitiveTag::Boolean => 0x01,
            PrimitiveTag::Integer => 0x02,
            PrimitiveTag::BitString => 0x03,
            PrimitiveTag::OctetString => 0x04,
            PrimitiveTag::Null => 0x05,
            PrimitiveTag::ObjectIdentifier => 0x06,
            PrimitiveTag::UTF8String => 0x0c,
            PrimitiveTag::Sequence => 0x30,
            PrimitiveTag::Set => 0x31,
            PrimitiveTag::PrintableString => 0x13,
            PrimitiveTag::IA5String => 0x16,
            PrimitiveTag::UTCTime => 0x17,
            PrimitiveTag::GeneralizedTime => 0x18,
            PrimitiveTag::Unimplemented(value) => *value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Universal class tag, along with the raw identifier octet.
    Primitive(PrimitiveTag, u8),
    ContextSpecific { slot: u8, constructed: bool },
}

impl Tag {
    pub fn is_constructed(&self) -> bool {
        match self {
            Tag::Primitive(_, raw) => raw & TAG_CONSTRUCTED == TAG_CONSTRUCTED,
            Tag::ContextSpecific { constructed, .. } => *constructed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    length: u64,
    value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Tlv(Vec<Tlv>),
    Data(Vec<u8>),
}

impl Tlv {
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Content octets of a primitive TLV.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Data(data) => Some(data),
            Value::Tlv(_) => None,
        }
    }

    /// Nested TLVs of a constructed TLV.
    pub fn tlvs(&self) -> Option<&[Tlv]> {
        match &self.value {
            Value::Tlv(tlvs) => Some(tlvs),
            Value::Data(_) => None,
        }
    }
}

fn parse_tlv(input: &[u8], depth: usize) -> IResult<&[u8], Tlv, Error> {
    if depth > MAX_DEPTH {
        return Err(nom::Err::Failure(Error::NestingTooDeep(MAX_DEPTH)));
    }
    let (input, tag) = parse_tag(input)?;
    let (input, length) = parse_length(input)?;
    let count = usize::try_from(length).map_err(|_| nom::Err::Failure(Error::LengthTooLong(8)))?;
    let (input, data) = nom::bytes::complete::take::<usize, &[u8], Error>(count).parse(input)?;

    let nested = matches!(
        tag,
        Tag::Primitive(PrimitiveTag::Sequence, _)
            | Tag::Primitive(PrimitiveTag::Set, _)
            | Tag::ContextSpecific {
                constructed: true,
                ..
            }
    );
    if !nested {
        return Ok((
            input,
            Tlv {
                tag,
                length,
                value: Value::Data(data.to_vec()),
            },
        ));
    }

    // parse TLV recursively.
    let mut tlvs = Vec::new();
    let mut data = data;
    while !data.is_empty() {
        let (rest, tlv) = parse_tlv(data, depth + 1)?;
        data = rest;
        tlvs.push(tlv);
    }
    Ok((
        input,
        Tlv {
            tag,
            length,
            value: Value::Tlv(tlvs),
        },
    ))
}

fn parse_tag(input: &[u8]) -> IResult<&[u8], Tag, Error> {
    let (input, n) = nom::number::complete::be_u8(input)?;
    if n & TAG_NUMBER_MASK == TAG_NUMBER_MASK {
        return Err(nom::Err::Failure(Error::HighTagNumber));
    }
    match n & TAG_CLASS_MASK {
        0 => Ok((input, Tag::Primitive(PrimitiveTag::from(n), n))),
        TAG_CLASS_CONTEXT_SPECIFIC => Ok((
            input,
            Tag::ContextSpecific {
                slot: n & TAG_NUMBER_MASK,
                constructed: n & TAG_CONSTRUCTED == TAG_CONSTRUCTED,
            },
        )),
        _ => Err(nom::Err::Failure(Error::UnsupportedTagClass(n))),
    }
}

fn parse_length(input: &[u8]) -> IResult<&[u8], u64, Error> {
    let (input, n) = nom::number::complete::be_u8(input)?;
    if n & 0x80 == 0 {
        // short form: 0-127
        return Ok((input, n as u64));
    }
    // long form
    // First 1 bit is a marker for long form.
    // Other bits represent bytes length of the length field.
    let octets = n & 0x7f;
    if octets == 0 {
        return Err(nom::Err::Failure(Error::IndefiniteLength));
    }
    if octets > MAX_LENGTH_OCTETS {
        return Err(nom::Err::Failure(Error::LengthTooLong(octets)));
    }
    let (input, bs) = nom::bytes::complete::take::<usize, &[u8], Error>(octets as usize).parse(input)?;
    let length = bs.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
    Ok((input, length))
}

#[cfg(test)]
mod tests {
    use kagi::decoder::Decoder;
    use rstest::rstest;

    use crate::{Der, Error, PrimitiveTag, Tag, Tlv, Value, parse_length, parse_tag};

    fn primitive(raw: u8) -> Tag {
        Tag::Primitive(PrimitiveTag::from(raw), raw)
    }

    #[rstest(input, expected,
        case(vec![0x02], primitive(0x02)),
        case(vec![0x02, 0x01], primitive(0x02)),
        case(vec![0x30, 0x01], primitive(0x30)),
        case(vec![0x0c], Tag::Primitive(PrimitiveTag::UTF8String, 0x0c)),
        case(vec![0x14], Tag::Primitive(PrimitiveTag::Unimplemented(0x14), 0x14)),
        case(vec![0xa0], Tag::ContextSpecific { slot: 0, constructed: true }),
        case(vec![0x81], Tag::ContextSpecific { slot: 1, constructed: false }),
        case(vec![0xa3], Tag::ContextSpecific { slot: 3, constructed: true }),
    )]
    fn test_parse_tag(input: Vec<u8>, expected: Tag) {
        let (_, actual) = parse_tag(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest]
    #[case::application(vec![0x60, 0x00], Error::UnsupportedTagClass(0x60))]
    #[case::private(vec![0xc1, 0x00], Error::UnsupportedTagClass(0xc1))]
    #[case::high_tag_number(vec![0x1f, 0x81, 0x00], Error::HighTagNumber)]
    fn test_parse_tag_error(#[case] input: Vec<u8>, #[case] expected: Error) {
        let err = parse_tag(&input).unwrap_err();
        assert_eq!(expected, Error::from(err));
    }

    #[rstest(input, expected,
        case(vec![0x02], 0x02),
        case(vec![0x7f], 0x7f),
        case(vec![0x81, 0x80], 0x80),
        case(vec![0x82, 0x02, 0x10], 256 * 0x02 + 0x10),
        case(vec![0x82, 0x00, 0x05], 5),
        case(vec![0x83, 0x01, 0x00, 0x00], 256 * 256),
        case(vec![0x82, 0xff, 0xff], 256 * 0xff + 0xff),
        case(vec![0x84, 0x00, 0x00, 0x04, 0xbe], 0x04be),
    )]
    fn test_parse_length(input: Vec<u8>, expected: u64) {
        let (_, actual) = parse_length(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest]
    #[case::indefinite(vec![0x80], Error::IndefiniteLength)]
    #[case::too_many_octets(vec![0x85, 0x01, 0x00, 0x00, 0x00, 0x00], Error::LengthTooLong(5))]
    #[case::truncated_long_form(vec![0x82, 0x01], Error::Parser(nom::error::ErrorKind::Eof))]
    #[case::empty(vec![], Error::Parser(nom::error::ErrorKind::Eof))]
    fn test_parse_length_error(#[case] input: Vec<u8>, #[case] expected: Error) {
        let err = parse_length(&input).unwrap_err();
        assert_eq!(expected, Error::from(err));
    }

    #[rstest(input, expected,
        case(vec![0x02, 0x01, 0x01], Tlv { tag: primitive(0x02), length: 1, value: Value::Data(vec![0x01]) }),
        case(vec![0x05, 0x00], Tlv { tag: primitive(0x05), length: 0, value: Value::Data(vec![]) }),
        case(vec![0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01], Tlv { tag: primitive(0x06), length: 9, value: Value::Data(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01]) }),
        case(vec![0x04, 0x82, 0x00, 0x02, 0xab, 0xcd], Tlv { tag: primitive(0x04), length: 2, value: Value::Data(vec![0xab, 0xcd]) }),
        case(vec![0x03, 0x04, 0x06, 0x6e, 0x5d, 0xc0], Tlv { tag: primitive(0x03), length: 4, value: Value::Data(vec![0x06, 0x6e, 0x5d, 0xc0]) }),
        case(vec![0x81, 0x02, 0x01, 0x02], Tlv { tag: Tag::ContextSpecific { slot: 1, constructed: false }, length: 2, value: Value::Data(vec![0x01, 0x02]) }),
    )]
    fn test_tlv_parse_primitive(input: Vec<u8>, expected: Tlv) {
        let der: Der = input.decode().unwrap();
        assert_eq!(&[expected], der.elements());
    }

    #[test]
    fn test_tlv_parse_structured() {
        // SEQUENCE { INTEGER 7, [0] { INTEGER 8 }, SET { NULL } }
        let input = vec![
            0x30, 0x0c, 0x02, 0x01, 0x07, 0xa0, 0x03, 0x02, 0x01, 0x08, 0x31, 0x02, 0x05, 0x00,
        ];
        let der: Der = input.decode().unwrap();

        let expected = Tlv {
            tag: primitive(0x30),
            length: 12,
            value: Value::Tlv(vec![
                Tlv { tag: primitive(0x02), length: 1, value: Value::Data(vec![0x07]) },
                Tlv {
                    tag: Tag::ContextSpecific { slot: 0, constructed: true },
                    length: 3,
                    value: Value::Tlv(vec![Tlv { tag: primitive(0x02), length: 1, value: Value::Data(vec![0x08]) }]),
                },
                Tlv {
                    tag: primitive(0x31),
                    length: 2,
                    value: Value::Tlv(vec![Tlv { tag: primitive(0x05), length: 0, value: Value::Data(vec![]) }]),
                },
            ]),
        };
        assert_eq!(&[expected], der.elements());
    }

    #[test]
    fn test_decode_multiple_top_level_elements() {
        let input: &[u8] = &[0x05, 0x00, 0x02, 0x01, 0x2a];
        let der: Der = input.decode().unwrap();
        assert_eq!(2, der.elements().len());
    }

    #[test]
    fn test_decode_empty_input() {
        let der: Der = Vec::<u8>::new().decode().unwrap();
        assert!(der.elements().is_empty());
    }

    #[rstest]
    #[case::length_exceeds_input(vec![0x30, 0x05, 0x02, 0x01], Error::Parser(nom::error::ErrorKind::Eof))]
    #[case::nested_length_exceeds_parent(vec![0x30, 0x03, 0x02, 0x05, 0x00], Error::Parser(nom::error::ErrorKind::Eof))]
    #[case::missing_length(vec![0x30], Error::Parser(nom::error::ErrorKind::Eof))]
    #[case::indefinite(vec![0x30, 0x80, 0x00, 0x00], Error::IndefiniteLength)]
    #[case::ascii_text(b"hello".to_vec(), Error::UnsupportedTagClass(0x68))]
    fn test_decode_malformed(#[case] input: Vec<u8>, #[case] expected: Error) {
        let result: Result<Der, Error> = input.decode();
        assert_eq!(Err(expected), result);
    }

    #[test]
    fn test_decode_nesting_too_deep() {
        let depth = 40;
        let mut input = vec![0x05, 0x00];
        for _ in 0..depth {
            let len = input.len() as u8;
            let mut wrapped = vec![0x30, 0x81, len];
            wrapped.extend(input);
            input = wrapped;
        }
        let result: Result<Der, Error> = input.decode();
        assert_eq!(Err(Error::NestingTooDeep(32)), result);
    }
}
