use clap::Subcommand;

use crate::cli::subcommands::{AdminCommands, LangCommands, ProjectsCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse the public project catalog.
    Projects {
        #[command(subcommand)]
        action: ProjectsCommands,
    },
    /// Manage project records (requires an admin API key).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Show or change the display language.
    Lang {
        #[command(subcommand)]
        action: Option<LangCommands>,
    },
}
