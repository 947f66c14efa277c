use clap::Args;
use kagi_pkcs::{KeyFormat, load_private_key};
use tracing::info;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the private key file (PKCS#1 PEM, PKCS#8 PEM or PKCS#8 DER). If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = Zeroizing::new(read_input(config.file.as_deref())?);
    let key = load_private_key(&input)?;
    info!(
        format = %KeyFormat::detect(&input),
        key_size = key.key_size(),
        "converted private key to PKCS#8"
    );
    println!("{}", key.to_pem());
    Ok(())
}
