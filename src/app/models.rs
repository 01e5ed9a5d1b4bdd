//! Data models for the academic registry
//!
//! This module contains the entity structures (students, instructors,
//! departments) and the tagged record types parsed from each delimited
//! source. Downstream code consumes named fields only; positional field
//! access ends at the parse boundary.

use crate::constants::{self, requirement_kind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Source Records
// =============================================================================

/// One line of the students source: cwid, name, major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub cwid: String,
    pub name: String,
    pub major: String,
}

impl StudentRecord {
    /// Build a record from reader fields; `None` when the arity is wrong
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let record = Self {
            cwid: fields.next()?,
            name: fields.next()?,
            major: fields.next()?,
        };
        fields.next().is_none().then_some(record)
    }
}

/// One line of the instructors source: cwid, name, department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructorRecord {
    pub cwid: String,
    pub name: String,
    pub department: String,
}

impl InstructorRecord {
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let record = Self {
            cwid: fields.next()?,
            name: fields.next()?,
            department: fields.next()?,
        };
        fields.next().is_none().then_some(record)
    }
}

/// One line of the grades source: student cwid, course, letter grade,
/// instructor cwid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub student_cwid: String,
    pub course: String,
    pub grade: String,
    pub instructor_cwid: String,
}

impl GradeRecord {
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let record = Self {
            student_cwid: fields.next()?,
            course: fields.next()?,
            grade: fields.next()?,
            instructor_cwid: fields.next()?,
        };
        fields.next().is_none().then_some(record)
    }
}

/// One line of the majors source: department, requirement kind, course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorRecord {
    pub department: String,
    pub kind: String,
    pub course: String,
}

impl MajorRecord {
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let record = Self {
            department: fields.next()?,
            kind: fields.next()?,
            course: fields.next()?,
        };
        fields.next().is_none().then_some(record)
    }
}

// =============================================================================
// Student
// =============================================================================

/// A single student with their recorded grades and outstanding requirements
///
/// `courses` holds the most recent letter grade per course code, passing or
/// not; a duplicate enrollment record overwrites the earlier grade. The two
/// remaining-course lists start empty and are populated exactly once by the
/// requirement reconciler after all ingestion completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique campus-wide identifier - primary key for student lookups
    pub cwid: String,

    /// Student name as recorded in the source file
    pub name: String,

    /// Department name of the student's major
    pub major: String,

    /// Course code to most recent recorded letter grade
    pub courses: HashMap<String, String>,

    /// Required courses of the major not yet passed (insertion order)
    pub remaining_required: Vec<String>,

    /// Elective courses still owed; empty once any one elective is passed
    pub remaining_elective: Vec<String>,
}

impl Student {
    /// Create a new student from its source record
    pub fn new(record: StudentRecord) -> Self {
        Self {
            cwid: record.cwid,
            name: record.name,
            major: record.major,
            courses: HashMap::new(),
            remaining_required: Vec::new(),
            remaining_elective: Vec::new(),
        }
    }

    /// Record a letter grade for a course, overwriting any earlier grade
    pub fn record_grade(&mut self, course: impl Into<String>, grade: impl Into<String>) {
        self.courses.insert(course.into(), grade.into());
    }

    /// Whether the student holds a passing grade in the given course
    pub fn has_passed(&self, course: &str) -> bool {
        self.courses
            .get(course)
            .is_some_and(|grade| constants::is_passing(grade))
    }

    /// Sorted course codes completed with a passing grade.
    ///
    /// Non-passing grades stay out of this list even though they occupy a
    /// course slot and count toward the GPA.
    pub fn completed_courses(&self) -> Vec<String> {
        let mut completed: Vec<String> = self
            .courses
            .iter()
            .filter(|(_, grade)| constants::is_passing(grade))
            .map(|(course, _)| course.clone())
            .collect();
        completed.sort();
        completed
    }

    /// Grade point average over every recorded grade, rounded to 2 decimal
    /// places. A student with no recorded grades has a GPA of 0.
    pub fn gpa(&self) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }

        let total: f64 = self
            .courses
            .values()
            .map(|grade| constants::grade_points(grade))
            .sum();
        let average = total / self.courses.len() as f64;
        (average * 100.0).round() / 100.0
    }
}

// =============================================================================
// Instructor
// =============================================================================

/// A single instructor with per-course teaching tallies
///
/// `course_counts` counts grade records taught under each course code, not
/// distinct students; a repeat record for the same course increments it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique campus-wide identifier - primary key for instructor lookups
    pub cwid: String,

    /// Instructor name as recorded in the source file
    pub name: String,

    /// Department the instructor belongs to
    pub department: String,

    /// Course code to number of grade records taught under it
    pub course_counts: HashMap<String, u32>,
}

impl Instructor {
    /// Create a new instructor from its source record
    pub fn new(record: InstructorRecord) -> Self {
        Self {
            cwid: record.cwid,
            name: record.name,
            department: record.department,
            course_counts: HashMap::new(),
        }
    }

    /// Count one more grade record taught under the given course
    pub fn record_teaching(&mut self, course: impl Into<String>) {
        *self.course_counts.entry(course.into()).or_insert(0) += 1;
    }
}

// =============================================================================
// Department
// =============================================================================

/// A department (major) with its requirement course sets
///
/// Course codes accumulate into a deduplicated set per requirement kind.
/// Kinds other than "R" and "E" are stored under their literal key and never
/// surface in either requirement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Department name, matching `Student::major`
    pub name: String,

    /// Requirement kind to deduplicated course code set
    pub courses: HashMap<String, BTreeSet<String>>,
}

impl Department {
    /// Create a new department with empty requirement sets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: HashMap::new(),
        }
    }

    /// Accumulate a course code into the set for a requirement kind
    pub fn add_course(&mut self, kind: impl Into<String>, course: impl Into<String>) {
        self.courses.entry(kind.into()).or_default().insert(course.into());
    }

    /// Courses required for the major
    pub fn required_courses(&self) -> impl Iterator<Item = &String> {
        self.courses
            .get(requirement_kind::REQUIRED)
            .into_iter()
            .flatten()
    }

    /// Elective courses of the major
    pub fn elective_courses(&self) -> impl Iterator<Item = &String> {
        self.courses
            .get(requirement_kind::ELECTIVE)
            .into_iter()
            .flatten()
    }
}
