//! Application constants for the academic registry
//!
//! This module contains the fixed grading tables, requirement kind codes,
//! and default source file names used throughout the registry.

// =============================================================================
// Grading Tables
// =============================================================================

/// Letter grade to GPA points, exhaustive over the institutional grade scale
pub const GRADE_POINTS: &[(&str, f64)] = &[
    ("A", 4.00),
    ("A-", 3.75),
    ("B+", 3.25),
    ("B", 3.00),
    ("B-", 2.75),
    ("C+", 2.25),
    ("C", 2.00),
    ("C-", 0.00),
    ("D+", 0.00),
    ("D", 0.00),
    ("D-", 0.00),
    ("F", 0.00),
];

/// Letter grades that count toward completed-course credit and
/// requirement satisfaction
pub const PASSING_GRADES: &[&str] = &["A", "A-", "B+", "B", "B-", "C+", "C"];

/// Look up the GPA points for a letter grade.
///
/// Grade strings outside [`GRADE_POINTS`] score 0.00 points. Such grades
/// still occupy a course slot and drag the average down, matching the
/// zero-point tail of the table (C- and below).
pub fn grade_points(grade: &str) -> f64 {
    GRADE_POINTS
        .iter()
        .find(|(letter, _)| *letter == grade)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

/// Whether a letter grade satisfies a requirement
pub fn is_passing(grade: &str) -> bool {
    PASSING_GRADES.contains(&grade)
}

// =============================================================================
// Requirement Kinds
// =============================================================================

/// Requirement kind codes as they appear in the majors source file
///
/// Records with other kind values are accepted and stored under their
/// literal key; they never surface in either requirement list.
pub mod requirement_kind {
    /// Required course for the major
    pub const REQUIRED: &str = "R";

    /// Elective course for the major
    pub const ELECTIVE: &str = "E";
}

// =============================================================================
// Default Source Files
// =============================================================================

/// Default file names for the four record sources within a data directory
pub mod source_files {
    pub const STUDENTS: &str = "students.txt";
    pub const INSTRUCTORS: &str = "instructors.txt";
    pub const GRADES: &str = "grades.txt";
    pub const MAJORS: &str = "majors.txt";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points_exact_per_table() {
        assert_eq!(grade_points("A"), 4.00);
        assert_eq!(grade_points("A-"), 3.75);
        assert_eq!(grade_points("B+"), 3.25);
        assert_eq!(grade_points("B"), 3.00);
        assert_eq!(grade_points("B-"), 2.75);
        assert_eq!(grade_points("C+"), 2.25);
        assert_eq!(grade_points("C"), 2.00);
        assert_eq!(grade_points("C-"), 0.00);
        assert_eq!(grade_points("D+"), 0.00);
        assert_eq!(grade_points("D"), 0.00);
        assert_eq!(grade_points("D-"), 0.00);
        assert_eq!(grade_points("F"), 0.00);
    }

    #[test]
    fn test_unmapped_grade_scores_zero() {
        assert_eq!(grade_points("W"), 0.0);
        assert_eq!(grade_points(""), 0.0);
    }

    #[test]
    fn test_passing_set() {
        for grade in ["A", "A-", "B+", "B", "B-", "C+", "C"] {
            assert!(is_passing(grade), "{grade} should pass");
        }
        for grade in ["C-", "D+", "D", "D-", "F", "W", ""] {
            assert!(!is_passing(grade), "{grade} should not pass");
        }
    }
}
