//! Registry construction from the four delimited record sources
//!
//! The builder reads the sources in a fixed dependency order (students,
//! instructors, grades, majors), enforces referential integrity between
//! grade records and the identities ingested before them, and hands back a
//! fully reconciled [`Registry`]. Any error aborts the whole build; no
//! partial registry escapes.

use crate::app::models::{
    Department, GradeRecord, Instructor, InstructorRecord, MajorRecord, Student, StudentRecord,
};
use crate::app::services::record_reader::DelimitedRecordReader;
use crate::app::services::reconciler;
use crate::config::RegistryConfig;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, info};

/// In-memory registry of students, instructors, and departments
///
/// Owned exclusively by the [`RegistryBuilder`] during construction. Once
/// the build returns, the registry is a finished snapshot; a refresh means
/// building a new one, not mutating this one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pub(crate) students: HashMap<String, Student>,
    pub(crate) instructors: HashMap<String, Instructor>,
    pub(crate) departments: HashMap<String, Department>,
}

impl Registry {
    /// Look up a student by CWID
    pub fn student(&self, cwid: &str) -> Option<&Student> {
        self.students.get(cwid)
    }

    /// Look up an instructor by CWID
    pub fn instructor(&self, cwid: &str) -> Option<&Instructor> {
        self.instructors.get(cwid)
    }

    /// Look up a department by name
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.get(name)
    }

    /// Iterate all students in unspecified order
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Iterate all instructors in unspecified order
    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    /// Iterate all departments in unspecified order
    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.values()
    }

    /// Number of students in the registry
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of instructors in the registry
    pub fn instructor_count(&self) -> usize {
        self.instructors.len()
    }

    /// Number of departments in the registry
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Split borrows for reconciliation: students mutably, departments shared
    pub(crate) fn students_and_departments(
        &mut self,
    ) -> (&mut HashMap<String, Student>, &HashMap<String, Department>) {
        (&mut self.students, &self.departments)
    }
}

/// Builder that turns the configured record sources into a [`Registry`]
#[derive(Debug)]
pub struct RegistryBuilder {
    config: RegistryConfig,
}

impl RegistryBuilder {
    /// Create a builder for the given configuration
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }

    /// Read all four sources, apply grade facts, and reconcile requirements.
    ///
    /// Processing order is fixed: students, then instructors, then grades
    /// (which require both identity maps), then majors. Requirement
    /// reconciliation runs last, once majors and student course maps are
    /// complete.
    pub fn build(&self) -> Result<Registry> {
        self.config.validate()?;

        info!(
            "Building registry from {}",
            self.config.data_dir.display()
        );

        let mut registry = Registry::default();
        self.ingest_students(&mut registry)?;
        self.ingest_instructors(&mut registry)?;
        self.ingest_grades(&mut registry)?;
        self.ingest_majors(&mut registry)?;

        reconciler::reconcile(&mut registry)?;

        info!(
            "Registry built: {} students, {} instructors, {} departments",
            registry.student_count(),
            registry.instructor_count(),
            registry.department_count()
        );

        Ok(registry)
    }

    /// Ingest the students source.
    ///
    /// A duplicate CWID silently overwrites the earlier student; uniqueness
    /// is not enforced at this layer.
    fn ingest_students(&self, registry: &mut Registry) -> Result<()> {
        let reader =
            DelimitedRecordReader::open_source(&self.config.data_dir, &self.config.students)?;

        for fields in reader {
            let record = StudentRecord::from_fields(fields?)
                .ok_or_else(|| Error::registry("Student record lost fields after arity check"))?;
            registry
                .students
                .insert(record.cwid.clone(), Student::new(record));
        }

        debug!("Ingested {} students", registry.student_count());
        Ok(())
    }

    /// Ingest the instructors source, last-write-wins like students
    fn ingest_instructors(&self, registry: &mut Registry) -> Result<()> {
        let reader =
            DelimitedRecordReader::open_source(&self.config.data_dir, &self.config.instructors)?;

        for fields in reader {
            let record = InstructorRecord::from_fields(fields?)
                .ok_or_else(|| Error::registry("Instructor record lost fields after arity check"))?;
            registry
                .instructors
                .insert(record.cwid.clone(), Instructor::new(record));
        }

        debug!("Ingested {} instructors", registry.instructor_count());
        Ok(())
    }

    /// Ingest the grades source, joining each fact against known identities.
    ///
    /// Every grade record, passing or not, updates the student's course map
    /// and the instructor's teaching tally. A dangling CWID on either side
    /// fails the build.
    fn ingest_grades(&self, registry: &mut Registry) -> Result<()> {
        let reader =
            DelimitedRecordReader::open_source(&self.config.data_dir, &self.config.grades)?;

        let mut grade_count = 0usize;
        for fields in reader {
            let record = GradeRecord::from_fields(fields?)
                .ok_or_else(|| Error::registry("Grade record lost fields after arity check"))?;

            let student = registry
                .students
                .get_mut(&record.student_cwid)
                .ok_or_else(|| Error::unknown_student(&record.student_cwid))?;
            student.record_grade(&record.course, &record.grade);

            let instructor = registry
                .instructors
                .get_mut(&record.instructor_cwid)
                .ok_or_else(|| Error::unknown_instructor(&record.instructor_cwid))?;
            instructor.record_teaching(&record.course);

            grade_count += 1;
        }

        debug!("Applied {} grade records", grade_count);
        Ok(())
    }

    /// Ingest the majors source, accumulating course sets per
    /// (department, kind) pair. Kind values are stored as-is.
    fn ingest_majors(&self, registry: &mut Registry) -> Result<()> {
        let reader =
            DelimitedRecordReader::open_source(&self.config.data_dir, &self.config.majors)?;

        for fields in reader {
            let record = MajorRecord::from_fields(fields?)
                .ok_or_else(|| Error::registry("Major record lost fields after arity check"))?;

            registry
                .departments
                .entry(record.department.clone())
                .or_insert_with(|| Department::new(record.department))
                .add_course(record.kind, record.course);
        }

        debug!("Ingested {} departments", registry.department_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_sources(
        students: &str,
        instructors: &str,
        grades: &str,
        majors: &str,
    ) -> (TempDir, RegistryConfig) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("students.txt"), students).unwrap();
        fs::write(dir.path().join("instructors.txt"), instructors).unwrap();
        fs::write(dir.path().join("grades.txt"), grades).unwrap();
        fs::write(dir.path().join("majors.txt"), majors).unwrap();
        let config = RegistryConfig::for_directory(dir.path());
        (dir, config)
    }

    fn default_sources() -> (TempDir, RegistryConfig) {
        write_sources(
            "CWID;Name;Major\n10103;Jobs, S;SFEN\n10115;Wozniak, S;SFEN\n",
            "CWID|Name|Dept\n98763|Rowland, J|SFEN\n",
            "Student|Course|Grade|Instructor\n\
             10103|SSW 810|A|98763\n\
             10115|SSW 810|F|98763\n",
            "Dept\tKind\tCourse\nSFEN\tR\tSSW 810\nSFEN\tR\tSSW 555\nSFEN\tE\tCS 501\n",
        )
    }

    #[test]
    fn test_build_populates_all_maps() {
        let (_dir, config) = default_sources();
        let registry = RegistryBuilder::new(config).build().unwrap();

        assert_eq!(registry.student_count(), 2);
        assert_eq!(registry.instructor_count(), 1);
        assert_eq!(registry.department_count(), 1);
    }

    #[test]
    fn test_grades_update_both_sides_including_failures() {
        let (_dir, config) = default_sources();
        let registry = RegistryBuilder::new(config).build().unwrap();

        // Failing grade still occupies the course slot
        let wozniak = registry.student("10115").unwrap();
        assert_eq!(wozniak.courses.get("SSW 810"), Some(&"F".to_string()));

        // Both grade records counted for the instructor
        let rowland = registry.instructor("98763").unwrap();
        assert_eq!(rowland.course_counts.get("SSW 810"), Some(&2));
    }

    #[test]
    fn test_unknown_student_fails_build() {
        let (_dir, config) = write_sources(
            "CWID;Name;Major\n10103;Jobs, S;SFEN\n",
            "CWID|Name|Dept\n98763|Rowland, J|SFEN\n",
            "Student|Course|Grade|Instructor\n99999|SSW 810|A|98763\n",
            "Dept\tKind\tCourse\nSFEN\tR\tSSW 810\n",
        );

        match RegistryBuilder::new(config).build().unwrap_err() {
            Error::UnknownStudent { cwid } => assert_eq!(cwid, "99999"),
            other => panic!("Expected UnknownStudent, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_instructor_fails_build() {
        let (_dir, config) = write_sources(
            "CWID;Name;Major\n10103;Jobs, S;SFEN\n",
            "CWID|Name|Dept\n98763|Rowland, J|SFEN\n",
            "Student|Course|Grade|Instructor\n10103|SSW 810|A|11111\n",
            "Dept\tKind\tCourse\nSFEN\tR\tSSW 810\n",
        );

        match RegistryBuilder::new(config).build().unwrap_err() {
            Error::UnknownInstructor { cwid } => assert_eq!(cwid, "11111"),
            other => panic!("Expected UnknownInstructor, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_cwid_last_write_wins() {
        let (_dir, config) = write_sources(
            "CWID;Name;Major\n10103;Jobs, S;SFEN\n10103;Gates, B;CS\n",
            "CWID|Name|Dept\n98763|Rowland, J|SFEN\n",
            "Student|Course|Grade|Instructor\n",
            "Dept\tKind\tCourse\nSFEN\tR\tSSW 810\nCS\tR\tCS 546\n",
        );

        let registry = RegistryBuilder::new(config).build().unwrap();
        assert_eq!(registry.student_count(), 1);
        assert_eq!(registry.student("10103").unwrap().name, "Gates, B");
        assert_eq!(registry.student("10103").unwrap().major, "CS");
    }

    #[test]
    fn test_missing_source_aborts_build() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("students.txt"), "CWID;Name;Major\n").unwrap();
        let config = RegistryConfig::for_directory(dir.path());

        // instructors.txt absent
        assert!(matches!(
            RegistryBuilder::new(config).build(),
            Err(Error::SourceNotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_source_aborts_build() {
        let (_dir, config) = write_sources(
            "CWID;Name;Major\n10103;Jobs, S;SFEN\n",
            "CWID|Name|Dept\n98763|Rowland, J\n",
            "Student|Course|Grade|Instructor\n",
            "Dept\tKind\tCourse\nSFEN\tR\tSSW 810\n",
        );

        match RegistryBuilder::new(config).build().unwrap_err() {
            Error::MalformedRecord { line, found, expected, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("Expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_requirement_kind_is_stored_silently() {
        let (_dir, config) = write_sources(
            "CWID;Name;Major\n10103;Jobs, S;SFEN\n",
            "CWID|Name|Dept\n98763|Rowland, J|SFEN\n",
            "Student|Course|Grade|Instructor\n",
            "Dept\tKind\tCourse\nSFEN\tR\tSSW 810\nSFEN\tX\tSSW 999\n",
        );

        let registry = RegistryBuilder::new(config).build().unwrap();
        let department = registry.department("SFEN").unwrap();

        assert!(department.courses.contains_key("X"));
        assert!(!department.required_courses().any(|c| c == "SSW 999"));
        assert!(!department.elective_courses().any(|c| c == "SSW 999"));
    }
}
