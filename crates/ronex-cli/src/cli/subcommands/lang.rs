use clap::Subcommand;
use ronex_core::Language;

/// Display language commands. No subcommand means `show`.
#[derive(Clone, Debug, Subcommand)]
pub enum LangCommands {
    /// Print the stored language.
    Show,
    /// Store a language: en, id
    Set { language: Language },
    /// Switch between English and Indonesian.
    Toggle,
}
