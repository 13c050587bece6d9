use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{Category, Language, Status};
use crate::image_ref::ImageRef;

/// A portfolio entry as stored by the backend.
///
/// Field names follow the backend's JSON (`_id`, `titleId`,
/// `descriptionId`). Unknown fields such as timestamps are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier.
    #[serde(rename = "_id", alias = "id", deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    /// Indonesian title.
    #[serde(rename = "titleId", default)]
    pub title_localized: String,
    #[serde(default)]
    pub description: String,
    /// Indonesian description.
    #[serde(rename = "descriptionId", default)]
    pub description_localized: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub location: String,
    /// Free-form `"<number> <unit>"`, e.g. `"1.5 months"`.
    #[serde(default)]
    pub duration: String,
    /// URL, embedded `data:image/...` string, raw base64 or asset path.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: Status,
}

impl Project {
    /// Title in `lang`, falling back to English when the localized string is blank.
    #[must_use]
    pub fn title_for(&self, lang: Language) -> &str {
        localized(&self.title, &self.title_localized, lang)
    }

    #[must_use]
    pub fn description_for(&self, lang: Language) -> &str {
        localized(&self.description, &self.description_localized, lang)
    }

    #[must_use]
    pub fn image_ref(&self) -> ImageRef<'_> {
        ImageRef::classify(&self.image)
    }

    /// The editable payload of this record, without its id.
    #[must_use]
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            title_localized: self.title_localized.clone(),
            description: self.description.clone(),
            description_localized: self.description_localized.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            duration: self.duration.clone(),
            image: self.image.clone(),
            status: self.status.clone(),
        }
    }
}

fn localized<'a>(english: &'a str, indonesian: &'a str, lang: Language) -> &'a str {
    match lang {
        Language::Id if !indonesian.trim().is_empty() => indonesian,
        _ => english,
    }
}

/// Request body for create and update. Always sent in full.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(rename = "titleId")]
    pub title_localized: String,
    pub description: String,
    #[serde(rename = "descriptionId")]
    pub description_localized: String,
    pub category: Category,
    pub location: String,
    pub duration: String,
    pub image: String,
    pub status: Status,
}

impl ProjectDraft {
    /// Names of required fields that are blank. The image is optional.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("titleId", &self.title_localized),
            ("description", &self.description),
            ("descriptionId", &self.description_localized),
            ("location", &self.location),
            ("duration", &self.duration),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Accept both Mongo-style string ids and integer ids from older fixtures.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
