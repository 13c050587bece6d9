//! Display shapes shared by catalog and admin output.

use ronex_catalog::status_color;
use ronex_core::{ImageRef, Language, Project};
use serde::Serialize;

/// One line of a project listing.
#[derive(Debug, Serialize)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: String,
    pub location: String,
    pub duration: String,
    pub image: &'static str,
}

impl ProjectRow {
    pub fn new(project: &Project, language: Language) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title_for(language).to_string(),
            category: project.category.to_string(),
            status: project.status.to_string(),
            location: project.location.clone(),
            duration: project.duration.clone(),
            image: image_kind(&project.image_ref()),
        }
    }
}

/// Everything about one project, localized.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub status_color: &'static str,
    pub location: String,
    pub duration: String,
    pub image_kind: &'static str,
    pub image: String,
}

impl ProjectDetail {
    pub fn new(project: &Project, language: Language) -> Self {
        let image = project.image_ref();
        let shown = match image {
            ImageRef::Embedded(data) | ImageRef::RawBase64(data) => {
                format!("<embedded image, {} characters>", data.len())
            }
            other => other.display_src().into_owned(),
        };
        Self {
            id: project.id.clone(),
            title: project.title_for(language).to_string(),
            description: project.description_for(language).to_string(),
            category: project.category.to_string(),
            status: project.status.to_string(),
            status_color: status_color(&project.status).hex(),
            location: project.location.clone(),
            duration: project.duration.clone(),
            image_kind: image_kind(&image),
            image: shown,
        }
    }
}

pub const fn image_kind(image: &ImageRef<'_>) -> &'static str {
    match image {
        ImageRef::Empty => "none",
        ImageRef::Url(_) => "url",
        ImageRef::Embedded(_) => "embedded",
        ImageRef::RawBase64(_) => "base64",
        ImageRef::AssetPath(_) => "asset",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ronex_core::{Category, Status};

    fn project(image: &str) -> Project {
        Project {
            id: "p9".into(),
            title: "Office Fit-out".into(),
            title_localized: "Interior Kantor".into(),
            description: "Open plan".into(),
            description_localized: String::new(),
            category: Category::Business,
            location: "Jakarta".into(),
            duration: "3 months".into(),
            image: image.into(),
            status: Status::Ongoing,
        }
    }

    #[test]
    fn row_is_localized() {
        let row = ProjectRow::new(&project(""), Language::Id);
        assert_eq!(row.title, "Interior Kantor");
        assert_eq!(row.category, "business");
        assert_eq!(row.image, "none");
    }

    #[test]
    fn detail_hides_embedded_payload() {
        let detail = ProjectDetail::new(&project("data:image/jpeg;base64,QUJD"), Language::Id);
        assert_eq!(detail.image_kind, "embedded");
        assert_eq!(detail.image, "<embedded image, 27 characters>");
        assert_eq!(detail.description, "Open plan");
        assert_eq!(detail.status_color, "#f39c12");
    }
}
