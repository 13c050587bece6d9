//! Credential-gated project management.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use ronex_auth::{KeySource, KeyStore};
use ronex_catalog::ProjectCache;
use ronex_client::{ApiKey, ClientError, DeleteAck, ProjectApi, Session};
use ronex_core::Project;
use tokio_util::sync::CancellationToken;

use crate::error::AdminError;
use crate::form::{FormMode, ProjectForm};
use crate::image::{EncodedImage, ImageIntake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Locked,
    Unlocked,
}

/// Admin panel state: access, session, loaded list and the open form.
///
/// Every async operation takes a [`CancellationToken`]. The backend call is
/// raced against it, and the token is checked once more before anything is
/// written to the panel, so a cancelled call leaves the panel unchanged.
pub struct AdminPanel<A> {
    api: Arc<A>,
    key_store: KeyStore,
    cache: Option<Arc<ProjectCache>>,
    intake: ImageIntake,
    session: Session,
    state: AccessState,
    projects: Vec<Project>,
    form: Option<ProjectForm>,
}

impl<A: ProjectApi> AdminPanel<A> {
    /// A locked panel. Call [`Self::start`] to pick up a persisted key.
    #[must_use]
    pub fn new(api: Arc<A>, key_store: KeyStore) -> Self {
        Self {
            api,
            key_store,
            cache: None,
            intake: ImageIntake::default(),
            session: Session::anonymous(),
            state: AccessState::Locked,
            projects: Vec::new(),
            form: None,
        }
    }

    /// Invalidate `cache` after every successful mutation.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<ProjectCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn with_intake(mut self, intake: ImageIntake) -> Self {
        self.intake = intake;
        self
    }

    /// Resume with a previously validated key, if one is stored.
    ///
    /// The stored key is trusted without another round trip; a revoked key
    /// surfaces as [`ClientError::Unauthorized`] on the first write.
    pub fn start(&mut self) -> AccessState {
        if let Some((key, source)) = self.key_store.load_with_source() {
            tracing::debug!(source = source.as_str(), "resuming with stored admin key");
            self.session.set_credential(key);
            self.state = AccessState::Unlocked;
        }
        self.state
    }

    #[must_use]
    pub const fn state(&self) -> AccessState {
        self.state
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn key_store(&self) -> &KeyStore {
        &self.key_store
    }

    /// The list as of the last successful reload.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub const fn form(&self) -> Option<&ProjectForm> {
        self.form.as_ref()
    }

    /// # Errors
    ///
    /// Returns [`AdminError::NoForm`] when no form is open.
    pub fn form_mut(&mut self) -> Result<&mut ProjectForm, AdminError> {
        self.form.as_mut().ok_or(AdminError::NoForm)
    }

    /// Validate `raw_key` against the backend and unlock on success.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Validation`] for a blank key (no request is made).
    /// - [`AdminError::InvalidKey`] when the backend answers 401.
    /// - [`AdminError::Connection`] for any other failure.
    /// - [`AdminError::Cancelled`] if `cancel` fires first.
    ///
    /// On error the panel stays locked and nothing is persisted.
    pub async fn unlock(&mut self, raw_key: &str, cancel: &CancellationToken) -> Result<(), AdminError> {
        let key = ApiKey::new(raw_key)
            .ok_or_else(|| AdminError::Validation("API key must not be empty".into()))?;

        match race(cancel, self.api.validate_credential(&key)).await? {
            Ok(()) => {}
            Err(ClientError::Unauthorized { message }) => {
                tracing::warn!("admin key rejected");
                return Err(AdminError::InvalidKey(message));
            }
            Err(error) => return Err(AdminError::Connection(error)),
        }

        self.key_store.store(&key)?;
        self.session.set_credential(key);
        self.state = AccessState::Unlocked;
        tracing::info!("admin panel unlocked");

        self.reload_after("unlock", cancel).await;
        Ok(())
    }

    /// Fetch the list straight from the backend, bypassing the cache.
    ///
    /// # Errors
    ///
    /// [`AdminError::Locked`], [`AdminError::Cancelled`] or the client error.
    pub async fn reload(&mut self, cancel: &CancellationToken) -> Result<&[Project], AdminError> {
        self.ensure_unlocked()?;
        let projects = race(cancel, self.api.get_all(&self.session)).await??;
        self.projects = projects;
        Ok(&self.projects)
    }

    /// # Errors
    ///
    /// Returns [`AdminError::Locked`] while locked.
    pub fn open_create(&mut self) -> Result<&mut ProjectForm, AdminError> {
        self.ensure_unlocked()?;
        Ok(self.form.insert(ProjectForm::create()))
    }

    /// Open the form pre-filled from a loaded record.
    ///
    /// # Errors
    ///
    /// [`AdminError::Locked`], or [`AdminError::NotFound`] if `id` is not in
    /// the loaded list.
    pub fn open_edit(&mut self, id: &str) -> Result<&mut ProjectForm, AdminError> {
        self.ensure_unlocked()?;
        let project = self
            .projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        let form = ProjectForm::edit(project);
        Ok(self.form.insert(form))
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Create or update from the open form.
    ///
    /// On success the form closes, the shared cache is invalidated and the
    /// list is reloaded. On failure the form keeps its data. If `cancel`
    /// fires while the request is in flight the write may still have landed,
    /// so the cache is invalidated before [`AdminError::Cancelled`] returns.
    ///
    /// # Errors
    ///
    /// [`AdminError::Locked`], [`AdminError::NoForm`],
    /// [`AdminError::Validation`] for blank required fields, or the client
    /// error from the write.
    pub async fn submit(&mut self, cancel: &CancellationToken) -> Result<Project, AdminError> {
        self.ensure_unlocked()?;
        let form = self.form.as_ref().ok_or(AdminError::NoForm)?;
        form.validate()?;

        let api = &*self.api;
        let session = &self.session;
        let saved = self
            .race_write(cancel, async {
                match &form.mode {
                    FormMode::Create => api.create(session, &form.draft).await,
                    FormMode::Edit { id } => api.update(session, id, &form.draft).await,
                }
            })
            .await??;

        self.form = None;
        self.invalidate_cache();
        self.reload_after("save", cancel).await;
        Ok(saved)
    }

    /// Delete a record, then invalidate the cache and reload. A delete
    /// cancelled in flight also invalidates the cache.
    ///
    /// # Errors
    ///
    /// [`AdminError::Locked`], [`AdminError::Cancelled`] or the client error.
    pub async fn delete(&mut self, id: &str, cancel: &CancellationToken) -> Result<DeleteAck, AdminError> {
        self.ensure_unlocked()?;
        let ack = self
            .race_write(cancel, self.api.delete(&self.session, id))
            .await??;

        if self.form.as_ref().and_then(ProjectForm::editing_id) == Some(id) {
            self.form = None;
        }
        self.invalidate_cache();
        self.reload_after("delete", cancel).await;
        Ok(ack)
    }

    /// Run the intake pipeline on `path` and put the result in the form.
    ///
    /// # Errors
    ///
    /// [`AdminError::NoForm`], [`AdminError::Intake`] or
    /// [`AdminError::Cancelled`]. The form's image is unchanged on error.
    pub async fn attach_image_file(
        &mut self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<EncodedImage, AdminError> {
        if self.form.is_none() {
            return Err(AdminError::NoForm);
        }
        let encoded = race(cancel, self.intake.encode_file(path)).await??;
        self.form_mut()?.draft.image.clone_from(&encoded.data_url);
        Ok(encoded)
    }

    /// Use a pasted URL or embedded string as the image.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoForm`] when no form is open.
    pub fn set_image_reference(&mut self, reference: &str) -> Result<(), AdminError> {
        self.form_mut()?.draft.image = reference.trim().to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`AdminError::NoForm`] when no form is open.
    pub fn clear_image(&mut self) -> Result<(), AdminError> {
        self.form_mut()?.draft.image.clear();
        Ok(())
    }

    /// Forget the key and lock.
    ///
    /// Returns the tier that still supplies a key (the environment), in
    /// which case the next [`Self::start`] unlocks again.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::KeyStore`] if the stored key cannot be removed;
    /// the in-memory state is cleared regardless.
    pub fn logout(&mut self) -> Result<Option<KeySource>, AdminError> {
        self.session.clear_credential();
        self.projects.clear();
        self.form = None;
        self.state = AccessState::Locked;
        tracing::info!("admin panel locked");
        let remaining = self.key_store.delete()?;
        if let Some(source) = remaining {
            tracing::warn!(source = source.as_str(), "an admin key is still configured");
        }
        Ok(remaining)
    }

    // --- Private helpers ---

    const fn ensure_unlocked(&self) -> Result<(), AdminError> {
        match self.state {
            AccessState::Unlocked => Ok(()),
            AccessState::Locked => Err(AdminError::Locked),
        }
    }

    fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate();
        }
    }

    /// Race a write against `cancel`. Once the request has been issued a
    /// cancellation leaves its outcome unknown, so the shared cache is
    /// dropped before reporting [`AdminError::Cancelled`].
    async fn race_write<F: Future>(
        &self,
        cancel: &CancellationToken,
        write: F,
    ) -> Result<F::Output, AdminError> {
        if cancel.is_cancelled() {
            return Err(AdminError::Cancelled);
        }
        let result = race(cancel, write).await;
        if matches!(result, Err(AdminError::Cancelled)) {
            tracing::warn!("write cancelled in flight; outcome unknown, cache invalidated");
            self.invalidate_cache();
        }
        result
    }

    /// Reload after a committed write. The write already happened, so a
    /// failed reload is logged rather than reported as the write failing.
    async fn reload_after(&mut self, operation: &'static str, cancel: &CancellationToken) {
        if let Err(error) = self.reload(cancel).await {
            tracing::warn!(%error, operation, "reload after write failed; list may be out of date");
        }
    }
}

/// Await `future` unless `cancel` fires first. A result that arrives after
/// cancellation is discarded.
async fn race<F: Future>(cancel: &CancellationToken, future: F) -> Result<F::Output, AdminError> {
    let output = tokio::select! {
        biased;
        () = cancel.cancelled() => return Err(AdminError::Cancelled),
        output = future => output,
    };
    if cancel.is_cancelled() {
        return Err(AdminError::Cancelled);
    }
    Ok(output)
}
