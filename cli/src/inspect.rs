use clap::Args;
use codepoint::inspect_unicode;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the text file. If not specified, reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let text = read_input(config.file.as_deref())?;
    let records = inspect_unicode(&text);

    match config.output {
        OutputFormat::Text => {
            for record in &records {
                println!("{record}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(&records)?),
    }

    Ok(())
}
