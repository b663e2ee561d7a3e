use ::rot::RotOptions;
use clap::Args;
use tracing::info;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Letters to shift by; any integer, negative shifts rotate backwards
    #[arg(short, long, default_value_t = RotOptions::default().shift, allow_negative_numbers = true)]
    shift: i64,

    /// Apply the inverse shift, undoing a previous rotation by --shift
    #[arg(long)]
    reverse: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;

    let mut options = RotOptions { shift: config.shift };
    if config.reverse {
        options = options.inverse();
    }
    info!(shift = options.normalized_shift(), "rotating");
    println!("{}", options.apply(&text));

    Ok(())
}
