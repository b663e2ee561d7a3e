pub(crate) mod decode;
pub(crate) mod encode;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum BinaryCommands {
    /// Write each character's code point in base 2
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Read base-2 groups back into characters
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
}
