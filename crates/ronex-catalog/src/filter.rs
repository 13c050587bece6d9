//! Category filtering.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use ronex_core::{Category, Project};

/// Which projects the catalog shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => &project.category == category,
        }
    }

    /// Matching projects in their original order. The input is untouched.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(Category::from(trimmed)))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_all_and_categories() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "business".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Business)
        );
        assert_eq!(
            "BUMN".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Other("BUMN".into()))
        );
    }

    #[test]
    fn category_match_is_exact() {
        let projects: Vec<Project> = ["business", "Business", "BUMN", "government"]
            .into_iter()
            .map(|category| Project {
                id: category.into(),
                title: "Site".into(),
                title_localized: "Lokasi".into(),
                description: String::new(),
                description_localized: String::new(),
                category: Category::from(category),
                location: "Jakarta".into(),
                duration: "3 months".into(),
                image: String::new(),
                status: ronex_core::Status::Completed,
            })
            .collect();

        let ids = |filter: &CategoryFilter| -> Vec<&str> {
            filter.apply(&projects).iter().map(|p| p.id.as_str()).collect()
        };
        assert_eq!(ids(&CategoryFilter::Only(Category::Business)), vec!["business"]);
        assert_eq!(ids(&CategoryFilter::Only(Category::Government)), vec!["government"]);
        assert_eq!(ids(&"BUMN".parse().unwrap()), vec!["BUMN"]);
    }

    #[test]
    fn display_round_trips() {
        let filter = CategoryFilter::Only(Category::Business);
        assert_eq!(filter.to_string(), "business");
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }
}
