use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod convert;
mod error;
mod inspect;
mod output;
mod utils;

#[derive(Parser)]
#[command(name = "kagi")]
#[command(about = "Load and check TLS certificate and private key files", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a certificate and private key and describe the pair
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
    /// Print a private key as PKCS#8 PEM
    Convert {
        #[command(flatten)]
        config: convert::Config,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect { config } => inspect::execute(config),
        Commands::Convert { config } => convert::execute(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
