use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod base64;
mod binary;
mod error;
mod hex;
mod inspect;
mod morse;
mod output;
mod rot;
mod url;
mod utils;

use error::Result;

use crate::binary::BinaryCommands;
use crate::hex::HexCommands;
use crate::morse::MorseCommands;

#[derive(Parser)]
#[command(name = "henkan")]
#[command(about = "Convert text to and from Morse, binary, hex, Base64, URL encoding and ROT", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Morse code operations
    Morse {
        #[command(subcommand)]
        command: MorseCommands,
    },
    /// Binary (one group per code point) operations
    Binary {
        #[command(subcommand)]
        command: BinaryCommands,
    },
    /// Hexadecimal (one pair per UTF-8 byte) operations
    Hex {
        #[command(subcommand)]
        command: HexCommands,
    },
    /// Base64 operations
    Base64 {
        #[command(subcommand)]
        command: base64::Base64Commands,
    },
    /// Percent-encoding (URL) operations
    Url {
        #[command(subcommand)]
        command: url::UrlCommands,
    },
    /// Rotate letters (Caesar / ROT13)
    Rot {
        #[command(flatten)]
        config: rot::Config,
    },
    /// List the Unicode code point of every character
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Morse { command } => match command {
            MorseCommands::Encode { config } => morse::encode::execute(config)?,
            MorseCommands::Decode { config } => morse::decode::execute(config)?,
            MorseCommands::Table => morse::print_table(),
        },
        Commands::Binary { command } => match command {
            BinaryCommands::Encode { config } => binary::encode::execute(config)?,
            BinaryCommands::Decode { config } => binary::decode::execute(config)?,
        },
        Commands::Hex { command } => match command {
            HexCommands::Encode { config } => hex::encode::execute(config)?,
            HexCommands::Decode { config } => hex::decode::execute(config)?,
        },
        Commands::Base64 { command } => base64::execute(command)?,
        Commands::Url { command } => url::execute(command)?,
        Commands::Rot { config } => rot::execute(config)?,
        Commands::Inspect { config } => inspect::execute(config)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(kind) = e.kind() {
                debug!(kind = %kind, "decode rejected: {e}");
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
