pub(crate) mod decode;
pub(crate) mod encode;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum MorseCommands {
    /// Encode text as Morse code
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Decode Morse code to text
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Print the symbol table
    Table,
}

pub(crate) fn print_table() {
    for (c, signal) in ::morse::table::entries() {
        println!("{c}\t{signal}");
    }
}
