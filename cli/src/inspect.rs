use std::fmt;

use clap::Args;
use kagi_identity::{Identity, KeyMaterialLoader};
use kagi_pkcs::KeyFormat;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_input;

const DATE_FORMAT: &str = "%b %d %H:%M:%S %Y GMT";

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the PEM certificate file
    cert: String,

    /// Path to the private key file (PKCS#1 PEM, PKCS#8 PEM or PKCS#8 DER)
    key: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Fail unless the private key belongs to the certificate
    #[arg(long)]
    require_match: bool,
}

#[derive(Serialize)]
struct Report {
    version: String,
    subject: String,
    issuer: String,
    serial_number: String,
    not_before: String,
    not_after: String,
    signature_algorithm: String,
    public_key_algorithm: String,
    key_format: String,
    key_size: u64,
    key_matches_certificate: bool,
}

impl Report {
    fn new(identity: &Identity, key_format: KeyFormat) -> Self {
        let cert = identity.certificate();
        Report {
            version: cert.version().to_string(),
            subject: cert.subject().to_string(),
            issuer: cert.issuer().to_string(),
            serial_number: cert.serial_number().format_hex(),
            not_before: cert.validity().not_before.format(DATE_FORMAT).to_string(),
            not_after: cert.validity().not_after.format(DATE_FORMAT).to_string(),
            signature_algorithm: cert.signature_algorithm().to_string(),
            public_key_algorithm: cert.subject_public_key_info().algorithm().to_string(),
            key_format: key_format.to_string(),
            key_size: identity.private_key().key_size(),
            key_matches_certificate: identity.key_matches_certificate(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Certificate:")?;
        writeln!(f, "    Version: {}", self.version)?;
        writeln!(f, "    Subject: {}", self.subject)?;
        writeln!(f, "    Issuer: {}", self.issuer)?;
        writeln!(f, "    Serial Number: {}", self.serial_number)?;
        writeln!(f, "    Not Before: {}", self.not_before)?;
        writeln!(f, "    Not After : {}", self.not_after)?;
        writeln!(f, "    Signature Algorithm: {}", self.signature_algorithm)?;
        writeln!(f, "    Public Key Algorithm: {}", self.public_key_algorithm)?;
        writeln!(f, "Private Key:")?;
        writeln!(f, "    Format: {}", self.key_format)?;
        writeln!(f, "    Key Size: {} bit", self.key_size)?;
        write!(
            f,
            "Key Matches Certificate: {}",
            if self.key_matches_certificate { "yes" } else { "no" }
        )
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    // Both files are read before anything is decoded.
    let cert = read_input(Some(config.cert.as_str()))?;
    let key = Zeroizing::new(read_input(Some(config.key.as_str()))?);

    let key_format = KeyFormat::detect(&key);
    let identity = KeyMaterialLoader::new()
        .require_matching_key(config.require_match)
        .load_from_bytes(&cert, &key)?;
    let report = Report::new(&identity, key_format);

    match config.output {
        OutputFormat::Text => {
            println!("{}", report);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
    }

    Ok(())
}
