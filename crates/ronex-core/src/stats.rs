//! Aggregate statistics over a project list.
//!
//! Everything here is a pure function over whatever slice it is given, cached
//! or not. All counts are zero for an empty list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::enums::Status;
use crate::project::Project;

/// Summary figures shown under the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    pub ongoing: usize,
    pub unique_locations: usize,
    pub categories: usize,
    /// Sum of the leading number of every duration, whatever its unit.
    pub total_duration_months: f64,
    /// Durations whose leading token is not a number. They add 0 to the sum.
    pub unparsed_durations: usize,
}

impl ProjectStats {
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            total: projects.len(),
            completed: completed_count(projects),
            ongoing: projects
                .iter()
                .filter(|p| p.status == Status::Ongoing)
                .count(),
            unique_locations: unique_location_count(projects),
            categories: category_count(projects),
            total_duration_months: total_duration_months(projects),
            unparsed_durations: projects
                .iter()
                .filter(|p| leading_duration_value(&p.duration).is_none())
                .count(),
        }
    }
}

#[must_use]
pub fn completed_count(projects: &[Project]) -> usize {
    projects
        .iter()
        .filter(|p| p.status == Status::Completed)
        .count()
}

/// Number of distinct `location` strings (exact match).
#[must_use]
pub fn unique_location_count(projects: &[Project]) -> usize {
    projects
        .iter()
        .map(|p| p.location.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[must_use]
pub fn category_count(projects: &[Project]) -> usize {
    projects
        .iter()
        .map(|p| &p.category)
        .collect::<HashSet<_>>()
        .len()
}

/// Sum of [`leading_duration_value`] over the list; unparseable entries add 0.
#[must_use]
pub fn total_duration_months(projects: &[Project]) -> f64 {
    projects
        .iter()
        .filter_map(|p| leading_duration_value(&p.duration))
        .sum()
}

/// Numeric prefix of the first whitespace-separated token.
///
/// `"1.5 months"` → `1.5`, `"8months"` → `8`, `"TBD"` → `None`.
#[must_use]
pub fn leading_duration_value(duration: &str) -> Option<f64> {
    let token = duration.split_whitespace().next()?;
    let numeric_len = token
        .find(|ch: char| !(ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-' | 'e' | 'E')))
        .unwrap_or(token.len());
    let candidate = &token[..numeric_len];

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
