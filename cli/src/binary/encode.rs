use clap::Args;
use radix::{Binary, BinaryOptions};

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Pad each group with zeros to a multiple of this many bits (0 disables padding)
    #[arg(short, long, default_value_t = BinaryOptions::default().group_size_bits)]
    group_bits: usize,

    /// Delimiter between groups
    #[arg(short, long, default_value_t = BinaryOptions::default().delimiter)]
    delimiter: String,

    /// Uppercase the output
    #[arg(long)]
    uppercase: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;

    let options = BinaryOptions {
        group_size_bits: config.group_bits,
        delimiter: config.delimiter,
        uppercase: config.uppercase,
    };
    println!("{}", Binary::encode(&text, &options));

    Ok(())
}
