use std::fs;
use std::path::{Path, PathBuf};

use ronex_client::ApiKey;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "ronex-admin";
const KEYRING_USER: &str = "admin-api-key";
const KEY_FILE_NAME: &str = "admin-api-key";
const KEY_ENV_VAR: &str = "RONEX_ADMIN__API_KEY";

/// Where a loaded key came from (for status display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Keyring,
    Env,
    File,
}

impl KeySource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Tiered storage for the admin key.
#[derive(Debug, Clone)]
pub struct KeyStore {
    keyring_service: Option<String>,
    env_var: Option<&'static str>,
    file_path: PathBuf,
}

impl KeyStore {
    /// Keyring + env + `~/.ronex/admin-api-key`.
    ///
    /// The keyring service defaults to `"ronex-admin"`; override it with
    /// `RONEX_KEYRING_SERVICE` to keep test runs away from real credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NoHomeDir`] if the home directory is unknown.
    pub fn user_default() -> Result<Self, AuthError> {
        let home = dirs::home_dir().ok_or(AuthError::NoHomeDir)?;
        let service = std::env::var("RONEX_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Ok(Self {
            keyring_service: Some(service),
            env_var: Some(KEY_ENV_VAR),
            file_path: home.join(".ronex").join(KEY_FILE_NAME),
        })
    }

    /// File storage only, at `path`.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: None,
            env_var: None,
            file_path: path.into(),
        }
    }

    /// Also read the key from the environment variable `var`.
    #[must_use]
    pub const fn with_env_var(mut self, var: &'static str) -> Self {
        self.env_var = Some(var);
        self
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Store a key in the OS keychain. Falls back to file if the keyring is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::KeyStoreError`] if both keyring and file storage fail.
    pub fn store(&self, key: &ApiKey) -> Result<(), AuthError> {
        let Some(entry) = self.keyring_entry() else {
            return self.store_file(key);
        };
        match entry.set_password(key.expose()) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.store_file(key)
            }
        }
    }

    /// Load the key. Priority: keyring → env → file.
    #[must_use]
    pub fn load(&self) -> Option<ApiKey> {
        self.load_with_source().map(|(key, _)| key)
    }

    /// Like [`Self::load`], also reporting which tier answered.
    #[must_use]
    pub fn load_with_source(&self) -> Option<(ApiKey, KeySource)> {
        if let Some(entry) = self.keyring_entry()
            && let Ok(raw) = entry.get_password()
            && let Some(key) = ApiKey::new(&raw)
        {
            return Some((key, KeySource::Keyring));
        }

        if let Some(var) = self.env_var
            && let Some(key) = std::env::var(var).ok().and_then(|raw| ApiKey::new(&raw))
        {
            return Some((key, KeySource::Env));
        }

        self.load_file().map(|key| (key, KeySource::File))
    }

    /// Delete the key from keyring and file. The env tier cannot be cleared
    /// from here, so the tier still supplying a key afterwards is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::KeyStoreError`] if the key file cannot be removed.
    pub fn delete(&self) -> Result<Option<KeySource>, AuthError> {
        if let Some(entry) = self.keyring_entry() {
            // May not exist.
            let _ = entry.delete_credential();
        }

        if self.file_path.exists() {
            fs::remove_file(&self.file_path).map_err(|e| {
                AuthError::KeyStoreError(format!(
                    "failed to delete {}: {e}",
                    self.file_path.display()
                ))
            })?;
        }
        Ok(self.load_with_source().map(|(_, source)| source))
    }

    // --- Private helpers ---

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn store_file(&self, key: &ApiKey) -> Result<(), AuthError> {
        let path = &self.file_path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::KeyStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, key.expose())
            .map_err(|e| AuthError::KeyStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::KeyStoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<ApiKey> {
        fs::read_to_string(&self.file_path)
            .ok()
            .and_then(|raw| ApiKey::new(&raw))
    }
}
