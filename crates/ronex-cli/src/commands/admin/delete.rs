use serde::Serialize;

use super::{cancel_on_ctrl_c, unlocked_panel};
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse {
    deleted: String,
    message: Option<String>,
    remaining: usize,
}

pub async fn handle(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete project {id} without --yes");
    }

    let mut panel = unlocked_panel(ctx)?;
    let cancel = cancel_on_ctrl_c();
    let ack = panel.delete(id, &cancel).await?;

    output(
        &DeleteResponse {
            deleted: id.to_string(),
            message: ack.message,
            remaining: panel.projects().len(),
        },
        flags.format,
    )
}
