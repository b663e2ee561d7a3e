#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One record per line: character, decimal code point, U+ label
    Text,
    /// JSON array of records
    Json,
    /// YAML sequence of records
    Yaml,
}
