//! # ronex-core
//!
//! Core types shared by every Ronex crate:
//! - [`Project`] records as the backend stores them, plus the [`ProjectDraft`]
//!   payload used for create/update
//! - Category, status and display-language enums
//! - Aggregate statistics over a project list
//! - Classification of the polymorphic `image` field
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod image_ref;
pub mod project;
pub mod stats;

pub use enums::{Category, Language, Status};
pub use errors::CoreError;
pub use image_ref::{EMBEDDED_JPEG_PREFIX, ImageRef};
pub use project::{Project, ProjectDraft};
pub use stats::ProjectStats;
