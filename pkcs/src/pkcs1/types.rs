use std::fmt;

use kagi::decoder::{DecodableFrom, Decoder};
use kagi_asn1::{ASN1Object, Element, Integer};
use kagi_der::Der;

use super::error::{Error, Result};

/*
RFC 8017 - PKCS #1: RSA Cryptography Specifications

RSAPrivateKey ::= SEQUENCE {
    version           Version,
    modulus           INTEGER,  -- n
    publicExponent    INTEGER,  -- e
    privateExponent   INTEGER,  -- d
    prime1            INTEGER,  -- p
    prime2            INTEGER,  -- q
    exponent1         INTEGER,  -- d mod (p-1)
    exponent2         INTEGER,  -- d mod (q-1)
    coefficient       INTEGER,  -- (inverse of q) mod p
    otherPrimeInfos   OtherPrimeInfos OPTIONAL
}

Version ::= INTEGER { two-prime(0), multi(1) }
    (CONSTRAINED BY {-- version must be multi if otherPrimeInfos present --})
*/

/// PKCS#1 RSAPrivateKey version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    TwoPrime = 0,
    Multi = 1,
}

impl TryFrom<i64> for Version {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Version::TwoPrime),
            1 => Ok(Version::Multi),
            _ => Err(Error::InvalidVersion(value)),
        }
    }
}

impl DecodableFrom<Element> for Version {}

impl Decoder<Element, Version> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Version> {
        match self {
            Element::Integer(int) => {
                let value = int.to_i64().ok_or(Error::VersionOutOfRange)?;
                Version::try_from(value)
            }
            _ => Err(Error::ExpectedInteger { field: "version" }),
        }
    }
}

/// PKCS#1 RSA Private Key structure
///
/// Decoding checks the structure only loosely against the math: the public
/// parts must be positive and, for two-prime keys, `modulus == prime1 * prime2`.
#[derive(Clone, PartialEq, Eq)]
pub struct RSAPrivateKey {
    pub version: Version,
    pub modulus: Integer,          // n
    pub public_exponent: Integer,  // e
    pub private_exponent: Integer, // d
    pub prime1: Integer,           // p
    pub prime2: Integer,           // q
    pub exponent1: Integer,        // d mod (p-1)
    pub exponent2: Integer,        // d mod (q-1)
    pub coefficient: Integer,      // (inverse of q) mod p
    pub other_prime_infos: Option<Element>,
}

impl RSAPrivateKey {
    /// Parses a DER RSAPrivateKey. The input must hold exactly one structure.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let der: Der = der.decode()?;
        let asn1_obj: ASN1Object = der.decode()?;
        match asn1_obj.elements() {
            [element] => element.decode(),
            [] => Err(Error::EmptyAsn1Object),
            _ => Err(Error::TrailingData),
        }
    }

    /// Get the key size in bits (RSA modulus bit length)
    pub fn key_size(&self) -> u64 {
        self.modulus.bits()
    }

    pub fn public_key(&self) -> RSAPublicKey {
        RSAPublicKey {
            modulus: self.modulus.clone(),
            public_exponent: self.public_exponent.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        match (self.version, &self.other_prime_infos) {
            (Version::TwoPrime, None) | (Version::Multi, Some(_)) => {}
            _ => return Err(Error::OtherPrimeInfosMismatch),
        }
        if !self.modulus.is_positive() {
            return Err(Error::NotPositive { field: "modulus" });
        }
        if !self.public_exponent.is_positive() {
            return Err(Error::NotPositive {
                field: "publicExponent",
            });
        }
        if self.version == Version::TwoPrime {
            let product = self.prime1.as_bigint() * self.prime2.as_bigint();
            if &product != self.modulus.as_bigint() {
                return Err(Error::ModulusMismatch);
            }
        }
        Ok(())
    }
}

// Private material stays out of logs and panic messages.
impl fmt::Debug for RSAPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RSAPrivateKey")
            .field("version", &self.version)
            .field("key_size", &self.key_size())
            .field("public_exponent", &self.public_exponent)
            .finish_non_exhaustive()
    }
}

fn integer(element: &Element, field: &'static str) -> Result<Integer> {
    match element {
        Element::Integer(int) => Ok(int.clone()),
        _ => Err(Error::ExpectedInteger { field }),
    }
}

impl DecodableFrom<Element> for RSAPrivateKey {}

impl Decoder<Element, RSAPrivateKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<RSAPrivateKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        let (fields, other_prime_infos) = match elements.as_slice() {
            [fields @ .., other] if elements.len() == 10 => (fields, Some(other.clone())),
            fields if fields.len() == 9 => (fields, None),
            _ => {
                return Err(Error::InvalidElementCount {
                    expected: "9 or 10",
                    actual: elements.len(),
                });
            }
        };
        let [
            version,
            modulus,
            public_exponent,
            private_exponent,
            prime1,
            prime2,
            exponent1,
            exponent2,
            coefficient,
        ] = fields
        else {
            return Err(Error::InvalidElementCount {
                expected: "9 or 10",
                actual: elements.len(),
            });
        };

        let version: Version = version.decode()?;
        let key = RSAPrivateKey {
            version,
            modulus: integer(modulus, "modulus")?,
            public_exponent: integer(public_exponent, "publicExponent")?,
            private_exponent: integer(private_exponent, "privateExponent")?,
            prime1: integer(prime1, "prime1")?,
            prime2: integer(prime2, "prime2")?,
            exponent1: integer(exponent1, "exponent1")?,
            exponent2: integer(exponent2, "exponent2")?,
            coefficient: integer(coefficient, "coefficient")?,
            other_prime_infos,
        };
        key.validate()?;
        Ok(key)
    }
}

/*
RFC 8017 - RSA Public Key

RSAPublicKey ::= SEQUENCE {
    modulus           INTEGER,  -- n
    publicExponent    INTEGER   -- e
}
*/

/// PKCS#1 RSA Public Key structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RSAPublicKey {
    pub modulus: Integer,         // n
    pub public_exponent: Integer, // e
}

impl RSAPublicKey {
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let der: Der = der.decode()?;
        let asn1_obj: ASN1Object = der.decode()?;
        match asn1_obj.elements() {
            [element] => element.decode(),
            [] => Err(Error::EmptyAsn1Object),
            _ => Err(Error::TrailingData),
        }
    }

    /// Get the key size in bits (RSA modulus bit length)
    pub fn key_size(&self) -> u64 {
        self.modulus.bits()
    }
}

impl DecodableFrom<Element> for RSAPublicKey {}

impl Decoder<Element, RSAPublicKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<RSAPublicKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        let [modulus, public_exponent] = elements.as_slice() else {
            return Err(Error::InvalidElementCount {
                expected: "2",
                actual: elements.len(),
            });
        };
        let key = RSAPublicKey {
            modulus: integer(modulus, "modulus")?,
            public_exponent: integer(public_exponent, "publicExponent")?,
        };
        if !key.modulus.is_positive() {
            return Err(Error::NotPositive { field: "modulus" });
        }
        Ok(key)
    }
}
