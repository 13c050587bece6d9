use clap::Parser;
use ronex_core::Language;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ronex` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ronex",
    version,
    about = "Ronex - construction project catalog and admin"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Display language for titles and descriptions: en, id
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            lang: self.lang,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use ronex_catalog::CategoryFilter;
    use ronex_core::{Category, Language};

    use super::subcommands::{AdminCommands, LangCommands, ProjectsCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["ronex", "--format", "json", "--lang", "id", "projects", "stats"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.lang, Some(Language::Id));
        assert!(matches!(
            cli.command,
            Commands::Projects {
                action: ProjectsCommands::Stats
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ronex", "projects", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["ronex", "--lang", "fr", "projects", "stats"]).is_err());
    }

    #[test]
    fn list_parses_filter_and_viewport() {
        let cli = Cli::try_parse_from([
            "ronex",
            "projects",
            "list",
            "--category",
            "business",
            "--scroll-offset",
            "900",
            "--viewport-height",
            "800",
            "--container-width",
            "1100",
        ])
        .expect("cli should parse");

        let Commands::Projects {
            action: ProjectsCommands::List(args),
        } = cli.command
        else {
            panic!("expected projects list");
        };
        assert_eq!(args.category, CategoryFilter::Only(Category::Business));
        assert_eq!(args.viewport().map(|v| v.scroll_offset), Some(900.0));
    }

    #[test]
    fn list_without_viewport_flags_is_unwindowed() {
        let cli = Cli::try_parse_from(["ronex", "projects", "list"]).expect("cli should parse");
        let Commands::Projects {
            action: ProjectsCommands::List(args),
        } = cli.command
        else {
            panic!("expected projects list");
        };
        assert_eq!(args.category, CategoryFilter::All);
        assert!(args.viewport().is_none());
    }

    #[test]
    fn create_requires_core_fields() {
        let missing = Cli::try_parse_from(["ronex", "admin", "create", "--title", "Only"]);
        assert!(missing.is_err());
    }

    #[test]
    fn image_and_image_file_conflict() {
        let parsed = Cli::try_parse_from([
            "ronex", "admin", "update", "p1", "--image", "https://x/y.jpg", "--image-file", "a.png",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn lang_defaults_to_show() {
        let cli = Cli::try_parse_from(["ronex", "lang"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Lang { action: None }));

        let cli = Cli::try_parse_from(["ronex", "lang", "set", "id"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Lang {
                action: Some(LangCommands::Set { language: Language::Id })
            }
        ));
    }

    #[test]
    fn delete_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["ronex", "admin", "delete", "p1"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Admin {
                action: AdminCommands::Delete { yes: false, .. }
            }
        ));
    }
}
