//! School entity model, seed DTO, and listing projections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use unipath_core::admission::AdmissionYearEntry;
use unipath_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusLocation {
    pub city: String,
    pub district: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_map_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campus {
    pub campus_id: String,
    pub campus_name: String,
    /// The campus used for region filtering. At most one per school should
    /// be marked main; the validator warns when none is.
    #[serde(default)]
    pub is_main: bool,
    pub location: CampusLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: String,
    pub department_name: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub academic_group: String,
    /// References into the parent school's `campuses` by `campus_id`.
    #[serde(default)]
    pub campus_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_study: Option<i32>,
    /// Admission data keyed by academic-year string, e.g. `"114"`.
    #[serde(default)]
    pub admission_data: BTreeMap<String, AdmissionYearEntry>,
}

/// A row from the `schools` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct School {
    pub id: DbId,
    pub school_id: String,
    pub school_name: String,
    pub school_type: String,
    pub school_url: Option<String>,
    pub school_images: Json<Vec<String>>,
    pub campuses: Json<Vec<Campus>>,
    pub departments: Json<Vec<Department>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for bulk seeding: the document shape accepted by the seed endpoint
/// and the `seed-schools` CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedSchool {
    pub school_id: String,
    pub school_name: String,
    pub school_type: String,
    #[serde(default)]
    pub school_url: Option<String>,
    #[serde(default)]
    pub school_images: Vec<String>,
    #[serde(default)]
    pub campuses: Vec<Campus>,
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// Department summary as returned by listings. `admission_data` is only
/// present when the request asked for `detail=true`.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRecord {
    pub department_id: String,
    pub department_name: String,
    pub college: String,
    pub academic_group: String,
    pub campus_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_data: Option<BTreeMap<String, AdmissionYearEntry>>,
}

impl DepartmentRecord {
    pub fn from_department(dept: Department, detail: bool) -> Self {
        Self {
            department_id: dept.department_id,
            department_name: dept.department_name,
            college: dept.college,
            academic_group: dept.academic_group,
            campus_ids: dept.campus_ids,
            admission_data: detail.then_some(dept.admission_data),
        }
    }
}

/// School as returned by listings: identity and campuses in full,
/// departments projected down to summaries.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolRecord {
    pub school_id: String,
    pub school_name: String,
    pub school_type: String,
    pub school_url: Option<String>,
    pub school_images: Vec<String>,
    pub campuses: Vec<Campus>,
    pub departments: Vec<DepartmentRecord>,
}

impl SchoolRecord {
    pub fn from_school(school: School, detail: bool) -> Self {
        let departments = school
            .departments
            .0
            .into_iter()
            .map(|dept| DepartmentRecord::from_department(dept, detail))
            .collect();
        Self {
            school_id: school.school_id,
            school_name: school.school_name,
            school_type: school.school_type,
            school_url: school.school_url,
            school_images: school.school_images.0,
            campuses: school.campuses.0,
            departments,
        }
    }
}
