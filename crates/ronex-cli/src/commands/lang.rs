use anyhow::Context;
use ronex_config::PreferenceStore;
use ronex_core::Language;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LangCommands;
use crate::output::output;

#[derive(Serialize)]
struct LangResponse {
    language: Language,
    path: String,
}

/// Handle `ronex lang [show|set|toggle]`.
pub fn handle(action: Option<&LangCommands>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = PreferenceStore::user_default()?;
    let prefs = match action {
        None | Some(LangCommands::Show) => store.load(),
        Some(LangCommands::Set { language }) => store.set_language(*language),
        Some(LangCommands::Toggle) => store.toggle_language(),
    }
    .with_context(|| format!("failed to update {}", store.path().display()))?;

    output(
        &LangResponse {
            language: prefs.language,
            path: store.path().display().to_string(),
        },
        flags.format,
    )
}
