//! # kagi
//!
//! Core conversion trait for the kagi TLS identity loader.
//!
//! Every layer of kagi turns one representation of key material into the
//! next one with the same `Decoder` trait:
//!
//! ```text
//! PEM → Vec<u8> → DER → ASN1Object → Certificate / PrivateKeyInfo
//! ```
//!
//! The `der`, `asn1`, `pkcs` and `x509` crates provide the concrete
//! implementations; this crate only defines the trait pair so that they all
//! agree on the shape of a conversion.
//!
//! ```ignore
//! use kagi::decoder::Decoder;
//! use kagi_asn1::ASN1Object;
//! use kagi_der::Der;
//!
//! let bytes = vec![0x30, 0x00];
//! let der: Der = bytes.decode().unwrap();
//! let asn1: ASN1Object = der.decode().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
