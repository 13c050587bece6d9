use ronex_auth::KeySource;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LogoutResponse {
    /// No key source is left; the next command starts locked.
    cleared: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining_source: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

impl LogoutResponse {
    const fn after(remaining: Option<KeySource>) -> Self {
        match remaining {
            None => Self {
                cleared: true,
                remaining_source: None,
                hint: None,
            },
            Some(source) => Self {
                cleared: false,
                remaining_source: Some(source.as_str()),
                hint: Some("unset RONEX_ADMIN__API_KEY to stay logged out"),
            },
        }
    }
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let remaining = ctx.admin_panel()?.logout()?;
    output(&LogoutResponse::after(remaining), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_logout_is_cleared() {
        let value = serde_json::to_value(LogoutResponse::after(None)).unwrap();
        assert_eq!(value, serde_json::json!({ "cleared": true }));
    }

    #[test]
    fn env_key_is_reported_as_remaining() {
        let value = serde_json::to_value(LogoutResponse::after(Some(KeySource::Env))).unwrap();
        assert_eq!(value["cleared"], false);
        assert_eq!(value["remaining_source"], "env");
        assert!(value["hint"].as_str().unwrap().contains("RONEX_ADMIN__API_KEY"));
    }
}
