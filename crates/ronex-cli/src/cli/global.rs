use clap::ValueEnum;
use ronex_core::Language;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Overrides the stored language preference for this invocation.
    pub lang: Option<Language>,
    pub quiet: bool,
    pub verbose: bool,
}
