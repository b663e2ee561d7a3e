use b64::Base64;
use clap::{Args, Subcommand};
use henkan::decoder::Decoder;
use henkan::encoder::Encoder;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Subcommand)]
pub(crate) enum Base64Commands {
    /// Encode the UTF-8 bytes of the text as standard Base64
    Encode {
        #[command(flatten)]
        config: EncodeConfig,
    },
    /// Decode standard Base64 to UTF-8 text
    Decode {
        #[command(flatten)]
        config: DecodeConfig,
    },
}

#[derive(Args)]
pub(crate) struct EncodeConfig {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Wrap output lines at this many characters (0 disables wrapping)
    #[arg(short, long, default_value_t = 0)]
    wrap: usize,
}

#[derive(Args)]
pub(crate) struct DecodeConfig {
    /// Path to the Base64 file. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(command: Base64Commands) -> Result<()> {
    match command {
        Base64Commands::Encode { config } => {
            let text = read_input(config.file.as_deref())?;
            let encoded: Base64 = text.as_str().encode()?;
            println!("{}", encoded.wrapped(config.wrap));
        }
        Base64Commands::Decode { config } => {
            let input = read_input(config.file.as_deref())?;
            let text: String = Base64::new(input).decode()?;
            println!("{text}");
        }
    }

    Ok(())
}
