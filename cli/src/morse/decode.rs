use clap::Args;
use henkan::decoder::Decoder;
use ::morse::{Morse, MorseOptions};
use tracing::info;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the Morse code file. If not specified, reads from stdin
    file: Option<String>,

    /// Separator between letters. Empty splits letters on any whitespace
    #[arg(long, default_value_t = MorseOptions::default().letter_separator)]
    letter_sep: String,

    /// Separator between words. `/` and runs of 3+ spaces are always accepted too
    #[arg(long, default_value_t = MorseOptions::default().word_separator)]
    word_sep: String,

    /// Write a replacement character for unknown tokens instead of dropping them
    #[arg(long)]
    strict: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let code = read_input(config.file.as_deref())?;
    info!(bytes = code.len(), strict = config.strict, "decoding morse");

    let options = MorseOptions {
        letter_separator: config.letter_sep,
        word_separator: config.word_sep,
        strict: config.strict,
        ..MorseOptions::default()
    };
    let text: String = Morse::new(code, options).decode()?;
    println!("{text}");

    Ok(())
}
