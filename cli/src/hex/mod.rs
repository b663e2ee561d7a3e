pub(crate) mod decode;
pub(crate) mod encode;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum HexCommands {
    /// Write the UTF-8 bytes of the text as hex pairs
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Read hex pairs back into UTF-8 text
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
}
