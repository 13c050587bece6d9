pub mod admin;
pub mod lang;
pub mod projects;
mod shared;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Projects { action } => projects::handle(&action, ctx, flags).await,
        Commands::Admin { action } => admin::handle(&action, ctx, flags).await,
        Commands::Lang { action } => lang::handle(action.as_ref(), flags),
    }
}
