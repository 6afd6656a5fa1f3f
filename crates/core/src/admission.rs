//! Admission-plan domain types.
//!
//! These mirror the nested per-year, per-channel admission documents carried
//! by every department: quotas, exam-level requirements, selection
//! multipliers, scoring weights, and the prior-year outcome used by
//! distribution-admission browsing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three government-defined intake channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionMethod {
    StarPlan,
    PersonalApplication,
    DistributionAdmission,
}

impl AdmissionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionMethod::StarPlan => "star_plan",
            AdmissionMethod::PersonalApplication => "personal_application",
            AdmissionMethod::DistributionAdmission => "distribution_admission",
        }
    }
}

impl fmt::Display for AdmissionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdmissionMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "star_plan" => Ok(AdmissionMethod::StarPlan),
            "personal_application" => Ok(AdmissionMethod::PersonalApplication),
            "distribution_admission" => Ok(AdmissionMethod::DistributionAdmission),
            other => Err(CoreError::Validation(format!(
                "unknown admission method: {other}"
            ))),
        }
    }
}

/// A single exam-level requirement.
///
/// `group` clusters requirements: within a group, satisfying any one member
/// suffices (OR); a department is eligible only if every group is satisfied
/// (AND). Data without an explicit group id degrades to a single OR group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamThreshold {
    pub subject: String,
    pub exam_type: String,
    /// Breakpoint label: 頂標, 前標, 均標, 後標, 底標, or 無/-- for none.
    pub threshold: String,
    #[serde(default)]
    pub group: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMultiplier {
    pub subject: String,
    #[serde(default)]
    pub multiplier: Option<f64>,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeight {
    pub subject: String,
    /// Which exam the weight draws from (學測 or 分科).
    pub source_type: String,
    pub multiplier: f64,
    #[serde(default)]
    pub order: Option<i32>,
}

/// One subject's grade in the prior-year passing sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingGrade {
    pub subject: String,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Last year's admission outcome for a plan (cutoff sequence and year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorYearOutcome {
    #[serde(default)]
    pub academic_year: Option<i32>,
    #[serde(default)]
    pub passing_sequence: Vec<PassingGrade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingCriterion {
    pub item: String,
    #[serde(default)]
    pub percentile: Option<f64>,
}

/// One intake channel's plan for one academic year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionPlan {
    #[serde(default)]
    pub quota: Option<i32>,
    #[serde(default)]
    pub exam_thresholds: Vec<ExamThreshold>,
    #[serde(default)]
    pub selection_multipliers: Vec<SelectionMultiplier>,
    #[serde(default)]
    pub scoring_weights: Vec<ScoringWeight>,
    #[serde(default)]
    pub tie_breakers: Vec<String>,
    #[serde(default)]
    pub english_listening_threshold: Option<String>,
    #[serde(default)]
    pub art_test_category: Option<String>,
    /// The previous year's outcome, carried directly on the plan it
    /// belongs to rather than embedded under a sibling year's record.
    #[serde(default)]
    pub prior_year_outcome: Option<PriorYearOutcome>,
    #[serde(default)]
    pub ranking_criteria: Vec<RankingCriterion>,
}

/// The plans a department offers in one academic year, keyed by channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionPlans {
    #[serde(default)]
    pub star_plan: Option<AdmissionPlan>,
    #[serde(default)]
    pub personal_application: Option<AdmissionPlan>,
    #[serde(default)]
    pub distribution_admission: Option<AdmissionPlan>,
}

impl AdmissionPlans {
    /// The plan for the given intake channel, if the department offers one.
    pub fn get(&self, method: AdmissionMethod) -> Option<&AdmissionPlan> {
        match method {
            AdmissionMethod::StarPlan => self.star_plan.as_ref(),
            AdmissionMethod::PersonalApplication => self.personal_application.as_ref(),
            AdmissionMethod::DistributionAdmission => self.distribution_admission.as_ref(),
        }
    }
}

/// Five published breakpoints for one subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreStandard {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub front: Option<f64>,
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub back: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreStandardTable {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub score_standards: BTreeMap<String, ScoreStandard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListeningStandard {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub levels: Vec<String>,
}

/// The assessment standards published alongside a year's plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentStandards {
    #[serde(default)]
    pub academic_ability_test: Option<ScoreStandardTable>,
    #[serde(default)]
    pub english_listening: Option<ListeningStandard>,
}

/// A department's admission data for one academic year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionYearEntry {
    #[serde(default)]
    pub plans: AdmissionPlans,
    #[serde(default)]
    pub assessment_standards: Option<AssessmentStandards>,
}
