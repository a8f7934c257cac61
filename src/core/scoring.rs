use std::collections::HashSet;

use crate::core::normalize::normalize;
use crate::core::related::are_related;

/// Calculate a match score (0-100) for a student's skills against an
/// internship's required skills
///
/// Rules:
/// - no required skills => 100 (nothing to satisfy, vacuous match)
/// - no student skills  => 0
/// - otherwise: a required skill is satisfied when its normalized form is in
///   the student's normalized skill set, or is related to any student skill
///   (see [`are_related`]); score = round(satisfied / required * 100)
///
/// Rounding uses `f64::round` (half away from zero), which for non-negative
/// ratios is round-half-up: 1 of 8 satisfied rounds 12.5 to 13. Deterministic
/// for fixed inputs.
pub fn calculate_match_score(student_skills: &[String], required_skills: &[String]) -> u8 {
    if required_skills.is_empty() {
        return 100;
    }
    if student_skills.is_empty() {
        return 0;
    }

    let student_set: HashSet<String> = student_skills.iter().map(|s| normalize(s)).collect();

    let match_count = required_skills
        .iter()
        .filter(|required| {
            let required = normalize(required);
            student_set.contains(&required)
                || student_set.iter().any(|student| are_related(student, &required))
        })
        .count();

    (match_count as f64 / required_skills.len() as f64 * 100.0).round() as u8
}
