//! In-memory screening pipeline for advanced school queries.
//!
//! The scalar filters (school id, type, region) run in SQL; everything
//! department-level happens here: the academic-group pre-filter, per-year
//! per-method plan resolution, the eligibility gates, regrouping surviving
//! departments under their school, and pagination. Pagination must come
//! last because a school only counts when at least one of its departments
//! survives screening.

use unipath_core::admission::AdmissionMethod;
use unipath_core::eligibility::{plan_eligible, ScreeningCriteria};
use unipath_db::models::school::{Department, DepartmentRecord, School, SchoolRecord};

/// A fully-resolved screening request.
#[derive(Debug, Clone)]
pub struct ScreeningQuery {
    /// Academic year whose plans are evaluated, e.g. `"114"`.
    pub year: String,
    /// Intake channel whose plan is evaluated.
    pub method: AdmissionMethod,
    /// Keep only departments in this academic group.
    pub academic_group: Option<String>,
    /// The per-plan gates (listening, prior outcome, exam levels).
    pub criteria: ScreeningCriteria,
    /// Include full `admission_data` in surviving department records.
    pub detail: bool,
}

/// Screening result: the page requested plus the pre-pagination total.
#[derive(Debug)]
pub struct ScreeningOutcome {
    pub total: usize,
    pub schools: Vec<SchoolRecord>,
}

/// Screen every school, keep those with at least one eligible department,
/// then paginate.
pub fn screen_schools(
    schools: Vec<School>,
    query: &ScreeningQuery,
    page: i64,
    limit: i64,
) -> ScreeningOutcome {
    let matched: Vec<SchoolRecord> = schools
        .into_iter()
        .filter_map(|school| screen_school(school, query))
        .collect();

    let total = matched.len();
    let offset = ((page - 1) * limit).max(0) as usize;
    let schools = matched
        .into_iter()
        .skip(offset)
        .take(limit.max(0) as usize)
        .collect();

    ScreeningOutcome { total, schools }
}

/// A school survives when at least one department does; survivors keep
/// only their eligible departments.
fn screen_school(school: School, query: &ScreeningQuery) -> Option<SchoolRecord> {
    let eligible: Vec<DepartmentRecord> = school
        .departments
        .0
        .into_iter()
        .filter_map(|dept| screen_department(dept, query))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    Some(SchoolRecord {
        school_id: school.school_id,
        school_name: school.school_name,
        school_type: school.school_type,
        school_url: school.school_url,
        school_images: school.school_images.0,
        campuses: school.campuses.0,
        departments: eligible,
    })
}

/// Resolve the department's plan for the requested year and method and
/// apply the gates. A department lacking the year entry or the plan is
/// dropped rather than treated as auto-pass.
fn screen_department(dept: Department, query: &ScreeningQuery) -> Option<DepartmentRecord> {
    if let Some(group) = &query.academic_group {
        if dept.academic_group != *group {
            return None;
        }
    }

    let entry = dept.admission_data.get(&query.year)?;
    let plan = entry.plans.get(query.method)?;

    if !plan_eligible(plan, &query.criteria) {
        return None;
    }

    Some(DepartmentRecord::from_department(dept, query.detail))
}
