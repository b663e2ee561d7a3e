use clap::Args;
use radix::{Hex, HexOptions};

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Delimiter between groups
    #[arg(short, long, default_value_t = HexOptions::default().delimiter)]
    delimiter: String,

    /// Write lowercase hex digits
    #[arg(long)]
    lowercase: bool,

    /// Bytes per group (0 writes one undelimited run)
    #[arg(short, long, default_value_t = HexOptions::default().bytes_per_group)]
    bytes_per_group: usize,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;

    let options = HexOptions {
        delimiter: config.delimiter,
        uppercase: !config.lowercase,
        bytes_per_group: config.bytes_per_group,
    };
    println!("{}", Hex::encode(&text, &options));

    Ok(())
}
