//! Structural validation for seed documents.
//!
//! Crawler output drifts: arrays arrive as strings, required fields go
//! missing, campus references dangle. This module walks raw JSON before it
//! is deserialized and reports every deviation with a severity, so a bad
//! export can be fixed instead of half-imported.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// JSON path of the offending value, e.g. `schools[3].campuses[0].city`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ValidationSummary {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub total_schools: usize,
    pub total_departments: usize,
    pub issues: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }
}

const PLAN_KEYS: &[&str] = &["personal_application", "distribution_admission", "star_plan"];

/// Validate a whole seed payload (must be an array of school documents).
pub fn validate(data: &Value) -> ValidationReport {
    let mut v = Validator::default();

    match data.as_array() {
        Some(schools) => {
            for (idx, school) in schools.iter().enumerate() {
                v.school(school, idx);
            }
        }
        None => v.error("root", "Data must be an array of schools"),
    }

    v.report()
}

#[derive(Default)]
struct Validator {
    issues: Vec<ValidationIssue>,
    schools: usize,
    departments: usize,
}

impl Validator {
    fn school(&mut self, school: &Value, index: usize) {
        let path = format!("schools[{index}]");
        self.schools += 1;

        for field in ["school_id", "school_name", "school_type", "school_url"] {
            self.required_string(school, &path, field);
        }

        match school.get("school_images").and_then(Value::as_array) {
            None => self.error(format!("{path}.school_images"), "Must be an array"),
            Some(images) if images.is_empty() => {
                self.warning(format!("{path}.school_images"), "Empty images array");
            }
            Some(_) => {}
        }

        match school.get("campuses").and_then(Value::as_array) {
            None => self.error(format!("{path}.campuses"), "Must be an array"),
            Some(campuses) if campuses.is_empty() => {
                self.error(format!("{path}.campuses"), "At least one campus required");
            }
            Some(campuses) => {
                for (idx, campus) in campuses.iter().enumerate() {
                    self.campus(campus, &format!("{path}.campuses[{idx}]"));
                }
                let has_main = campuses
                    .iter()
                    .any(|campus| campus.get("is_main") == Some(&Value::Bool(true)));
                if !has_main {
                    self.warning(format!("{path}.campuses"), "No main campus marked");
                }
            }
        }

        match school.get("departments").and_then(Value::as_array) {
            None => self.error(format!("{path}.departments"), "Must be an array"),
            Some(departments) if departments.is_empty() => {
                self.warning(format!("{path}.departments"), "No departments found");
            }
            Some(departments) => {
                for (idx, dept) in departments.iter().enumerate() {
                    self.department(dept, &format!("{path}.departments[{idx}]"), school);
                }
            }
        }
    }

    fn campus(&mut self, campus: &Value, path: &str) {
        self.required_string(campus, path, "campus_id");
        self.required_string(campus, path, "campus_name");
        if !campus.get("is_main").is_some_and(Value::is_boolean) {
            self.error(format!("{path}.is_main"), "Required boolean field missing");
        }

        match campus.get("location") {
            Some(location) if location.is_object() => {
                let location_path = format!("{path}.location");
                for field in ["city", "district", "address"] {
                    self.required_string(location, &location_path, field);
                }
            }
            _ => self.error(format!("{path}.location"), "Location object required"),
        }
    }

    fn department(&mut self, dept: &Value, path: &str, school: &Value) {
        self.departments += 1;

        self.required_string(dept, path, "department_id");
        self.required_string(dept, path, "department_name");

        match dept.get("college").and_then(Value::as_str) {
            Some("") | None => self.warning(format!("{path}.college"), "College is empty"),
            Some(_) => {}
        }

        match dept.get("campus_ids").and_then(Value::as_array) {
            None => self.error(format!("{path}.campus_ids"), "Must be an array"),
            Some(ids) => {
                let campuses = school
                    .get("campuses")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                for id in ids.iter().filter_map(Value::as_str) {
                    let exists = campuses
                        .iter()
                        .any(|campus| campus.get("campus_id").and_then(Value::as_str) == Some(id));
                    if !exists {
                        self.error(
                            format!("{path}.campus_ids"),
                            format!("Campus ID \"{id}\" not found in school.campuses"),
                        );
                    }
                }
            }
        }

        match dept.get("admission_data").and_then(Value::as_object) {
            Some(data) => {
                for (year, entry) in data {
                    self.admission_year(entry, &format!("{path}.admission_data.{year}"));
                }
            }
            None => self.error(
                format!("{path}.admission_data"),
                "Admission data object required",
            ),
        }
    }

    fn admission_year(&mut self, entry: &Value, path: &str) {
        let Some(plans) = entry.get("plans").filter(|plans| plans.is_object()) else {
            self.error(format!("{path}.plans"), "Plans object required");
            return;
        };

        for key in PLAN_KEYS {
            if let Some(plan) = plans.get(*key).filter(|plan| !plan.is_null()) {
                self.plan(plan, &format!("{path}.plans.{key}"));
            }
        }
    }

    fn plan(&mut self, plan: &Value, path: &str) {
        if let Some(quota) = plan.get("quota") {
            if quota.is_string() {
                self.issue(
                    Severity::Warning,
                    format!("{path}.quota"),
                    "Quota should be number, not string",
                    Some(quota),
                    Some("number"),
                );
            }
        }

        for field in ["exam_thresholds", "selection_multipliers"] {
            if let Some(value) = plan.get(field) {
                if value.is_string() {
                    self.issue(
                        Severity::Error,
                        format!("{path}.{field}"),
                        "Should be array, not string",
                        Some(value),
                        Some("array"),
                    );
                } else if !value.is_array() {
                    self.error(format!("{path}.{field}"), "Must be array");
                }
            }
        }

        if let Some(weights) = plan.get("scoring_weights").and_then(Value::as_array) {
            for (idx, weight) in weights.iter().enumerate() {
                if weight.get("source_type").and_then(Value::as_str).is_none() {
                    self.warning(
                        format!("{path}.scoring_weights[{idx}]"),
                        "Missing source_type field (should be 學測 or 分科)",
                    );
                }
            }
        }
    }

    fn required_string(&mut self, obj: &Value, path: &str, field: &str) {
        match obj.get(field) {
            None | Some(Value::Null) => {
                self.error(format!("{path}.{field}"), "Required field missing");
            }
            Some(value) if !value.is_string() => self.issue(
                Severity::Warning,
                format!("{path}.{field}"),
                "Type mismatch",
                Some(value),
                Some("string"),
            ),
            Some(_) => {}
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issue(Severity::Error, path, message, None, None);
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issue(Severity::Warning, path, message, None, None);
    }

    fn issue(
        &mut self,
        severity: Severity,
        path: impl Into<String>,
        message: impl Into<String>,
        actual: Option<&Value>,
        expected: Option<&str>,
    ) {
        self.issues.push(ValidationIssue {
            severity,
            path: path.into(),
            message: message.into(),
            actual: actual.map(Value::to_string),
            expected: expected.map(str::to_string),
        });
    }

    fn report(self) -> ValidationReport {
        let summary = ValidationSummary {
            errors: self
                .issues
                .iter()
                .filter(|issue| issue.severity == Severity::Error)
                .count(),
            warnings: self
                .issues
                .iter()
                .filter(|issue| issue.severity == Severity::Warning)
                .count(),
            info: self
                .issues
                .iter()
                .filter(|issue| issue.severity == Severity::Info)
                .count(),
        };
        ValidationReport {
            total_schools: self.schools,
            total_departments: self.departments,
            issues: self.issues,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_school() -> Value {
        json!({
            "school_id": "001",
            "school_name": "國立測試大學",
            "school_type": "公立",
            "school_url": "https://example.edu.tw",
            "school_images": ["a.jpg"],
            "campuses": [{
                "campus_id": "A",
                "campus_name": "校本部",
                "is_main": true,
                "location": { "city": "臺北市", "district": "大安區", "address": "某路1號" },
            }],
            "departments": [{
                "department_id": "001012",
                "department_name": "資訊工程學系",
                "college": "電機資訊學院",
                "academic_group": "資訊學群",
                "campus_ids": ["A"],
                "admission_data": {
                    "114": { "plans": { "personal_application": { "quota": 30 } } },
                },
            }],
        })
    }

    #[test]
    fn clean_data_passes() {
        let report = validate(&json!([valid_school()]));
        assert_eq!(report.total_schools, 1);
        assert_eq!(report.total_departments, 1);
        assert_eq!(report.summary.errors, 0);
        assert_eq!(report.summary.warnings, 0);
    }

    #[test]
    fn non_array_root_is_an_error() {
        let report = validate(&json!({"school_id": "001"}));
        assert!(report.has_errors());
    }

    #[test]
    fn dangling_campus_reference_is_an_error() {
        let mut school = valid_school();
        school["departments"][0]["campus_ids"] = json!(["GHOST"]);
        let report = validate(&json!([school]));
        assert!(report
            .issues
            .iter()
            .any(|issue| issue.severity == Severity::Error
                && issue.message.contains("GHOST")));
    }

    #[test]
    fn missing_main_campus_is_a_warning() {
        let mut school = valid_school();
        school["campuses"][0]["is_main"] = json!(false);
        let report = validate(&json!([school]));
        assert_eq!(report.summary.errors, 0);
        assert!(report
            .issues
            .iter()
            .any(|issue| issue.message == "No main campus marked"));
    }

    #[test]
    fn stringly_typed_thresholds_are_an_error() {
        let mut school = valid_school();
        school["departments"][0]["admission_data"]["114"]["plans"]["personal_application"]
            ["exam_thresholds"] = json!("無");
        let report = validate(&json!([school]));
        assert!(report.has_errors());
    }

    #[test]
    fn string_quota_is_a_warning() {
        let mut school = valid_school();
        school["departments"][0]["admission_data"]["114"]["plans"]["personal_application"]
            ["quota"] = json!("30");
        let report = validate(&json!([school]));
        assert_eq!(report.summary.errors, 0);
        assert!(report
            .issues
            .iter()
            .any(|issue| issue.path.ends_with(".quota")));
    }

    #[test]
    fn missing_plans_object_is_an_error() {
        let mut school = valid_school();
        school["departments"][0]["admission_data"]["114"] = json!({});
        let report = validate(&json!([school]));
        assert!(report.has_errors());
    }
}
