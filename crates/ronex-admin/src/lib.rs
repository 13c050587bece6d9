//! # ronex-admin
//!
//! Credential-gated management of project records.
//!
//! [`AdminPanel`] starts [`AccessState::Locked`]. [`AdminPanel::unlock`]
//! validates a key against the backend, persists it through
//! [`ronex_auth::KeyStore`] and unlocks. Once unlocked the panel loads the
//! list, edits one record at a time through a [`ProjectForm`], and
//! invalidates the shared [`ronex_catalog::ProjectCache`] after each write.
//!
//! Uploaded pictures go through [`ImageIntake`] before they reach the form.

mod error;
mod form;
pub mod image;
mod panel;

pub use error::{AdminError, IntakeError};
pub use form::{FormMode, ProjectForm};
pub use image::{EncodedImage, ImageIntake};
pub use panel::{AccessState, AdminPanel};
