use ronex_admin::AccessState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AdminStatusResponse {
    state: &'static str,
    key_source: Option<&'static str>,
    key_file: String,
    backend: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let panel = ctx.admin_panel()?;
    let store = panel.key_store();

    output(
        &AdminStatusResponse {
            state: match panel.state() {
                AccessState::Locked => "locked",
                AccessState::Unlocked => "unlocked",
            },
            key_source: store.load_with_source().map(|(_, source)| source.as_str()),
            key_file: store.file_path().display().to_string(),
            backend: ctx.api.base_url().to_string(),
        },
        flags.format,
    )
}
