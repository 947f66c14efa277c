use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("parser error {0:?}")]
    Parser(ErrorKind),
    #[error("parser incomplete: {0:?}")]
    ParserIncomplete(nom::Needed),
    #[error("unsupported tag class in tag 0x{0:02x}")]
    UnsupportedTagClass(u8),
    #[error("high tag number form is not supported")]
    HighTagNumber,
    #[error("indefinite length is not allowed in DER")]
    IndefiniteLength,
    #[error("length field of {0} bytes is too long")]
    LengthTooLong(u8),
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

impl<'a> ParseError<&'a [u8]> for Error {
    fn from_error_kind(_input: &'a [u8], kind: ErrorKind) -> Self {
        Error::Parser(kind)
    }

    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<Error>> for Error {
    fn from(err: nom::Err<Error>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}
