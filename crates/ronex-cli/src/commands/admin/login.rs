use serde::Serialize;

use super::cancel_on_ctrl_c;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    unlocked: bool,
    projects: usize,
    key_source: Option<&'static str>,
}

pub async fn handle(key: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut panel = ctx.admin_panel()?;
    let cancel = cancel_on_ctrl_c();
    panel.unlock(key, &cancel).await?;

    output(
        &LoginResponse {
            unlocked: true,
            projects: panel.projects().len(),
            key_source: panel
                .key_store()
                .load_with_source()
                .map(|(_, source)| source.as_str()),
        },
        flags.format,
    )
}
