use clap::{Args, Subcommand};
use henkan::decoder::Decoder;
use henkan::encoder::Encoder;
use percent::Percent;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Subcommand)]
pub(crate) enum UrlCommands {
    /// Percent-encode every byte outside the unreserved set
    Encode {
        #[command(flatten)]
        config: Config,
    },
    /// Decode %XX escapes to UTF-8 text
    Decode {
        #[command(flatten)]
        config: Config,
    },
}

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(command: UrlCommands) -> Result<()> {
    match command {
        UrlCommands::Encode { config } => {
            let text = read_input(config.file.as_deref())?;
            let encoded: Percent = text.as_str().encode()?;
            println!("{encoded}");
        }
        UrlCommands::Decode { config } => {
            let input = read_input(config.file.as_deref())?;
            let text: String = Percent::new(input).decode()?;
            println!("{text}");
        }
    }

    Ok(())
}
