//! Query parameter types for the schools listing endpoint.

use serde::Deserialize;
use unipath_core::eligibility::SubjectLevels;
use unipath_core::grading::{listening_level, project_level};
use unipath_core::types::Level;
use unipath_db::repositories::SchoolFilter;

/// Academic year assumed when the request does not name one.
pub const DEFAULT_YEAR: &str = "114";

/// Page size used when the request does not name one.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Upper bound on the page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw query parameters of `GET /schools`.
///
/// Any of `method`, `group`, `listening`, or a subject score switches the
/// request from plain attribute filtering into the screening pipeline.
#[derive(Debug, Default, Deserialize)]
pub struct SchoolsQuery {
    pub region: Option<String>,
    pub school_id: Option<String>,
    #[serde(rename = "type")]
    pub school_type: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// `detail=true` includes full `admission_data` per department.
    #[serde(default)]
    pub detail: bool,
    pub year: Option<String>,
    pub method: Option<String>,
    pub group: Option<String>,
    /// English-listening grade the user holds (A/B/C/F).
    pub listening: Option<String>,
    // Raw subject scores.
    pub chinese: Option<i32>,
    pub english: Option<i32>,
    #[serde(rename = "mathA")]
    pub math_a: Option<i32>,
    #[serde(rename = "mathB")]
    pub math_b: Option<i32>,
    pub science: Option<i32>,
    pub social: Option<i32>,
}

impl SchoolsQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn year(&self) -> String {
        self.year.clone().unwrap_or_else(|| DEFAULT_YEAR.to_string())
    }

    /// The scalar filters to push into SQL.
    pub fn filter(&self) -> SchoolFilter {
        SchoolFilter {
            school_id: self.school_id.clone(),
            school_type: self.school_type.clone(),
            region: self.region.clone(),
        }
    }

    /// Supplied raw scores paired with their subject names.
    fn scores(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        [
            ("國文", self.chinese),
            ("英文", self.english),
            ("數學A", self.math_a),
            ("數學B", self.math_b),
            ("自然", self.science),
            ("社會", self.social),
        ]
        .into_iter()
        // Zero and negative scores are treated as not supplied.
        .filter_map(|(subject, score)| score.filter(|&s| s > 0).map(|s| (subject, s)))
    }

    pub fn has_scores(&self) -> bool {
        self.scores().next().is_some()
    }

    /// Whether any advanced parameter was explicitly supplied.
    pub fn has_advanced_filters(&self) -> bool {
        self.method.is_some()
            || self.group.is_some()
            || self.listening.is_some()
            || self.has_scores()
    }

    /// Supplied scores projected onto ordinal levels, or `None` when the
    /// score gate is inactive.
    pub fn subject_levels(&self) -> Option<SubjectLevels> {
        if !self.has_scores() {
            return None;
        }
        Some(
            self.scores()
                .map(|(subject, score)| (subject, project_level(subject, score)))
                .collect(),
        )
    }

    /// The user's listening ordinal, or `None` when the gate is inactive.
    /// Unknown grades are read as F so the filter relaxes rather than
    /// excluding everything.
    pub fn user_listening_level(&self) -> Option<Level> {
        self.listening
            .as_deref()
            .map(|grade| listening_level(grade).max(1))
    }
}
