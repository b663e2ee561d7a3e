use clap::Args;
use ::morse::{Morse, MorseOptions};
use tracing::info;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Separator written between letters
    #[arg(long, default_value_t = MorseOptions::default().letter_separator)]
    letter_sep: String,

    /// Separator written between words
    #[arg(long, default_value_t = MorseOptions::default().word_separator)]
    word_sep: String,

    /// Copy characters without a Morse signal through instead of dropping them
    #[arg(long)]
    keep_unknown: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;
    info!(chars = text.chars().count(), "encoding morse");

    let options = MorseOptions {
        letter_separator: config.letter_sep,
        word_separator: config.word_sep,
        keep_unknown: config.keep_unknown,
        ..MorseOptions::default()
    };
    println!("{}", Morse::encode(&text, &options));

    Ok(())
}
