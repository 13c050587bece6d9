//! The create/edit form.

use ronex_core::{Project, ProjectDraft};

use crate::error::AdminError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// An open form: what it will do on submit, and the field values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub mode: FormMode,
    pub draft: ProjectDraft,
}

impl ProjectForm {
    /// Empty form with default category and status.
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: ProjectDraft::default(),
        }
    }

    /// Form pre-filled from every field of `project`.
    #[must_use]
    pub fn edit(project: &Project) -> Self {
        Self {
            mode: FormMode::Edit {
                id: project.id.clone(),
            },
            draft: project.to_draft(),
        }
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }

    /// Presence check on the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] listing the blank fields.
    pub fn validate(&self) -> Result<(), AdminError> {
        let missing = self.draft.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AdminError::Validation(format!(
                "required fields are empty: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ronex_core::{Category, Status};

    #[test]
    fn create_form_starts_blank() {
        let form = ProjectForm::create();
        assert_eq!(form.editing_id(), None);
        assert_eq!(form.draft.category, Category::Residential);
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "required fields are empty: title, titleId, description, descriptionId, location, duration"
        );
    }

    #[test]
    fn edit_form_is_prefilled() {
        let project = Project {
            id: "66a1".into(),
            title: "Warehouse".into(),
            title_localized: "Gudang".into(),
            description: "Steel frame".into(),
            description_localized: "Rangka baja".into(),
            category: Category::Business,
            location: "Bekasi".into(),
            duration: "4 months".into(),
            image: "https://cdn.example.com/w.jpg".into(),
            status: Status::Ongoing,
        };
        let form = ProjectForm::edit(&project);
        assert_eq!(form.editing_id(), Some("66a1"));
        assert_eq!(form.draft, project.to_draft());
        assert!(form.validate().is_ok());
    }
}
