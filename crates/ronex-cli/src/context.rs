//! Shared state for command handlers.

use std::sync::Arc;

use anyhow::Context;
use ronex_admin::{AdminPanel, ImageIntake};
use ronex_auth::KeyStore;
use ronex_catalog::{ItemEstimate, ProjectCache};
use ronex_client::ApiClient;
use ronex_config::{PreferenceStore, RonexConfig};
use ronex_core::Language;

use crate::cli::GlobalFlags;

pub struct AppContext {
    pub config: RonexConfig,
    pub api: Arc<ApiClient>,
    pub cache: Arc<ProjectCache>,
    pub language: Language,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = RonexConfig::load_with_dotenv().context("failed to load configuration")?;
        let api = ApiClient::new(&config.api).context("failed to build HTTP client")?;
        let cache = ProjectCache::from_config(&config.cache);
        let language = resolve_language(flags)?;
        tracing::debug!(base_url = api.base_url(), %language, "context ready");

        Ok(Self {
            config,
            api: Arc::new(api),
            cache: Arc::new(cache),
            language,
        })
    }

    pub fn item_estimate(&self) -> ItemEstimate {
        ItemEstimate::from(&self.config.catalog)
    }

    /// An admin panel sharing this context's client and cache, resumed from
    /// any stored key.
    pub fn admin_panel(&self) -> anyhow::Result<AdminPanel<ApiClient>> {
        let key_store = KeyStore::user_default().context("failed to locate admin key store")?;
        let mut panel = AdminPanel::new(Arc::clone(&self.api), key_store)
            .with_cache(Arc::clone(&self.cache))
            .with_intake(ImageIntake::from_config(&self.config.image));
        panel.start();
        Ok(panel)
    }
}

/// `--lang` wins over the stored preference.
pub fn resolve_language(flags: &GlobalFlags) -> anyhow::Result<Language> {
    if let Some(language) = flags.lang {
        return Ok(language);
    }
    let store = PreferenceStore::user_default()?;
    Ok(store
        .load()
        .with_context(|| format!("failed to read {}", store.path().display()))?
        .language)
}
