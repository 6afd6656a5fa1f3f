//! GSAT score-to-level projection.
//!
//! Each subject has five published breakpoints (頂標/前標/均標/後標/底標) for
//! the 114 academic year. A raw subject score projects onto an ordinal
//! [`Level`]: 5 at or above the top breakpoint, down to 1 at the bottom
//! breakpoint, and 0 below all of them. Admission requirements are published
//! as breakpoint *labels*, which map onto the same scale for comparison.

use crate::types::Level;

/// Per-subject breakpoints, ordered `[頂標, 前標, 均標, 後標, 底標]`.
const SUBJECT_BANDS: &[(&str, [i32; 5])] = &[
    ("國文", [13, 12, 10, 9, 7]),
    ("英文", [13, 11, 8, 4, 3]),
    ("數學A", [11, 9, 6, 4, 3]),
    ("數學B", [12, 10, 6, 4, 3]),
    ("社會", [13, 12, 10, 8, 7]),
    ("自然", [13, 12, 9, 7, 5]),
];

/// Breakpoints applied to subjects without a published table.
const DEFAULT_BANDS: [i32; 5] = [13, 10, 7, 4, 1];

/// Query-parameter keys and the subject names they select.
pub const QUERY_SUBJECTS: &[(&str, &str)] = &[
    ("chinese", "國文"),
    ("english", "英文"),
    ("mathA", "數學A"),
    ("mathB", "數學B"),
    ("science", "自然"),
    ("social", "社會"),
];

/// Project a raw subject score onto its ordinal level.
///
/// # Examples
///
/// ```
/// use unipath_core::grading::project_level;
/// assert_eq!(project_level("國文", 13), 5); // 頂標
/// assert_eq!(project_level("國文", 12), 4); // 前標
/// assert_eq!(project_level("國文", 6), 0);  // below 底標
/// ```
pub fn project_level(subject: &str, score: i32) -> Level {
    let bands = SUBJECT_BANDS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, bands)| *bands)
        .unwrap_or(DEFAULT_BANDS);

    match bands.iter().position(|&b| score >= b) {
        Some(idx) => (5 - idx) as Level,
        None => 0,
    }
}

/// Ordinal for a published requirement label.
///
/// 頂標 is 5 down to 底標 at 1. Anything else -- including 無 and `--`,
/// which mean the subject is not required -- is 0 and therefore always
/// satisfied.
pub fn threshold_label_level(label: &str) -> Level {
    match label {
        "頂標" => 5,
        "前標" => 4,
        "均標" => 3,
        "後標" => 2,
        "底標" => 1,
        _ => 0,
    }
}

/// Ordinal for an English-listening grade.
///
/// A is the highest at 4; F the lowest passing grade at 1. 無 and `--`
/// mean the school sets no listening requirement and map to 0.
pub fn listening_level(grade: &str) -> Level {
    match grade {
        "A" => 4,
        "B" => 3,
        "C" => 2,
        "F" => 1,
        _ => 0,
    }
}

/// Resolve a score query-parameter key (e.g. `mathA`) to its subject name.
pub fn subject_for_query_key(key: &str) -> Option<&'static str> {
    QUERY_SUBJECTS
        .iter()
        .find(|(query_key, _)| *query_key == key)
        .map(|(_, subject)| *subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_breakpoint_projects_to_five() {
        for (subject, bands) in SUBJECT_BANDS {
            assert_eq!(project_level(subject, bands[0]), 5);
            assert_eq!(project_level(subject, bands[0] + 2), 5);
        }
    }

    #[test]
    fn below_bottom_projects_to_zero() {
        for (subject, bands) in SUBJECT_BANDS {
            assert_eq!(project_level(subject, bands[4] - 1), 0);
        }
    }

    #[test]
    fn interior_bands() {
        // 國文: [13, 12, 10, 9, 7]
        assert_eq!(project_level("國文", 12), 4);
        assert_eq!(project_level("國文", 11), 3);
        assert_eq!(project_level("國文", 10), 3);
        assert_eq!(project_level("國文", 9), 2);
        assert_eq!(project_level("國文", 7), 1);
    }

    #[test]
    fn unlisted_subject_uses_default_bands() {
        assert_eq!(project_level("拉丁文", 13), 5);
        assert_eq!(project_level("拉丁文", 1), 1);
        assert_eq!(project_level("拉丁文", 0), 0);
    }

    #[test]
    fn threshold_labels() {
        assert_eq!(threshold_label_level("頂標"), 5);
        assert_eq!(threshold_label_level("底標"), 1);
        assert_eq!(threshold_label_level("無"), 0);
        assert_eq!(threshold_label_level("--"), 0);
    }

    #[test]
    fn listening_grades() {
        assert_eq!(listening_level("A"), 4);
        assert_eq!(listening_level("F"), 1);
        assert_eq!(listening_level("無"), 0);
        assert_eq!(listening_level("--"), 0);
    }

    #[test]
    fn query_key_mapping() {
        assert_eq!(subject_for_query_key("science"), Some("自然"));
        assert_eq!(subject_for_query_key("social"), Some("社會"));
        assert_eq!(subject_for_query_key("history"), None);
    }
}
