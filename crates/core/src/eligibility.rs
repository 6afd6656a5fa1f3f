//! Admission-plan eligibility evaluation.
//!
//! Implements the two screening gates applied to a resolved plan: the
//! English-listening requirement and the group-partitioned exam-level
//! requirements (OR within a group, AND across groups).

use std::collections::BTreeMap;

use crate::admission::{AdmissionPlan, ExamThreshold};
use crate::grading::{listening_level, threshold_label_level};
use crate::types::Level;

/// A user's projected levels, keyed by subject name.
///
/// Subjects without a supplied score read as level 0, which never satisfies
/// a real requirement.
#[derive(Debug, Clone, Default)]
pub struct SubjectLevels(BTreeMap<String, Level>);

impl SubjectLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: impl Into<String>, level: Level) {
        self.0.insert(subject.into(), level);
    }

    /// The user's level for a subject; missing scores contribute 0.
    pub fn get(&self, subject: &str) -> Level {
        self.0.get(subject).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Level)> for SubjectLevels {
    fn from_iter<I: IntoIterator<Item = (S, Level)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(subject, level)| (subject.into(), level))
                .collect(),
        )
    }
}

/// The active screening gates for one query.
#[derive(Debug, Clone, Default)]
pub struct ScreeningCriteria {
    /// User's listening ordinal; `None` disables the listening gate.
    pub listening: Option<Level>,
    /// User's projected subject levels; `None` disables the score gate.
    pub levels: Option<SubjectLevels>,
    /// Require the plan to carry a prior-year outcome
    /// (distribution-admission browsing shows last year's cutoffs).
    pub require_prior_outcome: bool,
}

impl ScreeningCriteria {
    /// Whether any gate is active at all.
    pub fn is_active(&self) -> bool {
        self.listening.is_some() || self.levels.is_some() || self.require_prior_outcome
    }
}

/// Evaluate the group-partitioned exam-level requirements.
///
/// Requirements are partitioned by their `group` id. A group is satisfied
/// when at least one of its members is met; the whole set is satisfied when
/// every group is. An empty set is vacuously satisfied -- callers that want
/// "no declared thresholds" to mean "excluded" must check emptiness first,
/// as [`plan_eligible`] does.
pub fn meets_exam_thresholds(thresholds: &[ExamThreshold], levels: &SubjectLevels) -> bool {
    let mut groups: BTreeMap<i32, bool> = BTreeMap::new();
    for th in thresholds {
        let met = levels.get(&th.subject) >= threshold_label_level(&th.threshold);
        let entry = groups.entry(th.group).or_insert(false);
        *entry = *entry || met;
    }
    groups.values().all(|&satisfied| satisfied)
}

/// Apply every active gate to a resolved plan.
///
/// - Listening: the plan's required grade (default F) must not exceed the
///   user's grade. 無 and `--` read as 0 and always pass.
/// - Prior-year outcome: required when browsing distribution admission.
/// - Exam levels: a plan with no declared thresholds is excluded whenever
///   the score gate is active; otherwise every threshold group must be
///   satisfied.
pub fn plan_eligible(plan: &AdmissionPlan, criteria: &ScreeningCriteria) -> bool {
    if let Some(user_level) = criteria.listening {
        let required = listening_level(
            plan.english_listening_threshold
                .as_deref()
                .unwrap_or("F"),
        );
        if required > user_level {
            return false;
        }
    }

    if criteria.require_prior_outcome && plan.prior_year_outcome.is_none() {
        return false;
    }

    if let Some(levels) = &criteria.levels {
        if plan.exam_thresholds.is_empty() {
            return false;
        }
        if !meets_exam_thresholds(&plan.exam_thresholds, levels) {
            return false;
        }
    }

    true
}
