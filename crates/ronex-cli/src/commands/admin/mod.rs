mod delete;
mod login;
mod logout;
mod status;
mod write;

use ronex_admin::{AccessState, AdminPanel};
use ronex_client::ApiClient;
use tokio_util::sync::CancellationToken;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `ronex admin <subcommand>`.
pub async fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::Login { key } => login::handle(key, ctx, flags).await,
        AdminCommands::Logout => logout::handle(ctx, flags),
        AdminCommands::Status => status::handle(ctx, flags),
        AdminCommands::Create(args) => write::create(args, ctx, flags).await,
        AdminCommands::Update(args) => write::update(args, ctx, flags).await,
        AdminCommands::Delete { id, yes } => delete::handle(id, *yes, ctx, flags).await,
    }
}

/// A token cancelled by Ctrl-C.
fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted; cancelling admin operation");
            trigger.cancel();
        }
    });
    token
}

/// The stored-key panel, or an error telling the operator to log in.
fn unlocked_panel(ctx: &AppContext) -> anyhow::Result<AdminPanel<ApiClient>> {
    let panel = ctx.admin_panel()?;
    if panel.state() == AccessState::Locked {
        anyhow::bail!("not logged in; run `ronex admin login <key>` first");
    }
    Ok(panel)
}
