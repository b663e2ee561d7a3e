use clap::Args;
use henkan::decoder::Decoder;
use radix::Binary;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the binary text file. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let text: String = Binary::new(input).decode()?;
    println!("{text}");

    Ok(())
}
