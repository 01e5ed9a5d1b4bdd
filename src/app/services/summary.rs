//! Summary projection of registry state into display-ready rows
//!
//! Pure, read-only transformation from a finished [`Registry`] to three
//! ordered views. The projector may run any number of times and always
//! produces the same rows for the same registry state: rows and the course
//! lists inside them are sorted, never left in map iteration order.

use crate::app::services::registry_builder::Registry;
use serde::Serialize;

/// One department with its sorted requirement course lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRow {
    pub department: String,
    pub required: Vec<String>,
    pub electives: Vec<String>,
}

/// One student with completed and outstanding courses plus GPA
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRow {
    pub cwid: String,
    pub name: String,
    pub major: String,
    pub completed: Vec<String>,
    pub remaining_required: Vec<String>,
    pub remaining_elective: Vec<String>,
    pub gpa: f64,
}

/// One (instructor, course) pair with the taught-record count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorRow {
    pub cwid: String,
    pub name: String,
    pub department: String,
    pub course: String,
    pub students: u32,
}

/// Read-only projector over a finished registry
#[derive(Debug)]
pub struct SummaryProjector<'a> {
    registry: &'a Registry,
}

impl<'a> SummaryProjector<'a> {
    /// Create a projector borrowing the registry
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// One row per department, sorted by department name
    pub fn department_rows(&self) -> Vec<DepartmentRow> {
        let mut rows: Vec<DepartmentRow> = self
            .registry
            .departments()
            .map(|department| DepartmentRow {
                department: department.name.clone(),
                required: department.required_courses().cloned().collect(),
                electives: department.elective_courses().cloned().collect(),
            })
            .collect();
        rows.sort_by(|a, b| a.department.cmp(&b.department));
        rows
    }

    /// One row per student, sorted by CWID.
    ///
    /// Completed courses are those with a passing grade; non-passing grades
    /// are excluded here though they still weigh on the GPA.
    pub fn student_rows(&self) -> Vec<StudentRow> {
        let mut rows: Vec<StudentRow> = self
            .registry
            .students()
            .map(|student| {
                let mut remaining_required = student.remaining_required.clone();
                remaining_required.sort();
                let mut remaining_elective = student.remaining_elective.clone();
                remaining_elective.sort();

                StudentRow {
                    cwid: student.cwid.clone(),
                    name: student.name.clone(),
                    major: student.major.clone(),
                    completed: student.completed_courses(),
                    remaining_required,
                    remaining_elective,
                    gpa: student.gpa(),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.cwid.cmp(&b.cwid));
        rows
    }

    /// One row per distinct course an instructor has taught, sorted by
    /// (CWID, course)
    pub fn instructor_rows(&self) -> Vec<InstructorRow> {
        let mut rows: Vec<InstructorRow> = self
            .registry
            .instructors()
            .flat_map(|instructor| {
                instructor
                    .course_counts
                    .iter()
                    .map(|(course, count)| InstructorRow {
                        cwid: instructor.cwid.clone(),
                        name: instructor.name.clone(),
                        department: instructor.department.clone(),
                        course: course.clone(),
                        students: *count,
                    })
            })
            .collect();
        rows.sort_by(|a, b| (&a.cwid, &a.course).cmp(&(&b.cwid, &b.course)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::registry_builder::RegistryBuilder;
    use crate::config::RegistryConfig;
    use std::fs;
    use tempfile::TempDir;

    fn sample_registry() -> (TempDir, Registry) {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("students.txt"),
            "CWID;Name;Major\n10115;Wozniak, S;SFEN\n10103;Jobs, S;SFEN\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("instructors.txt"),
            "CWID|Name|Dept\n98763|Rowland, J|SFEN\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("grades.txt"),
            "Student|Course|Grade|Instructor\n\
             10103|SSW 810|A|98763\n\
             10103|CS 501|B|98763\n\
             10115|SSW 810|F|98763\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("majors.txt"),
            "Dept\tKind\tCourse\nSFEN\tR\tSSW 810\nSFEN\tR\tSSW 555\nSFEN\tE\tCS 501\n",
        )
        .unwrap();

        let registry = RegistryBuilder::new(RegistryConfig::for_directory(dir.path()))
            .build()
            .unwrap();
        (dir, registry)
    }

    #[test]
    fn test_department_rows_sorted_courses() {
        let (_dir, registry) = sample_registry();
        let rows = SummaryProjector::new(&registry).department_rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].department, "SFEN");
        assert_eq!(rows[0].required, vec!["SSW 555".to_string(), "SSW 810".to_string()]);
        assert_eq!(rows[0].electives, vec!["CS 501".to_string()]);
    }

    #[test]
    fn test_student_rows_sorted_by_cwid() {
        let (_dir, registry) = sample_registry();
        let rows = SummaryProjector::new(&registry).student_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cwid, "10103");
        assert_eq!(rows[1].cwid, "10115");
    }

    #[test]
    fn test_student_row_completed_excludes_failures() {
        let (_dir, registry) = sample_registry();
        let rows = SummaryProjector::new(&registry).student_rows();

        let jobs = &rows[0];
        assert_eq!(jobs.completed, vec!["CS 501".to_string(), "SSW 810".to_string()]);
        assert_eq!(jobs.remaining_required, vec!["SSW 555".to_string()]);
        assert!(jobs.remaining_elective.is_empty());
        assert_eq!(jobs.gpa, 3.5);

        // F occupies the slot but completes nothing
        let wozniak = &rows[1];
        assert!(wozniak.completed.is_empty());
        assert_eq!(wozniak.gpa, 0.0);
    }

    #[test]
    fn test_instructor_rows_one_per_course() {
        let (_dir, registry) = sample_registry();
        let rows = SummaryProjector::new(&registry).instructor_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].course, "CS 501");
        assert_eq!(rows[0].students, 1);
        assert_eq!(rows[1].course, "SSW 810");
        assert_eq!(rows[1].students, 2);
    }

    #[test]
    fn test_projection_is_repeatable() {
        let (_dir, registry) = sample_registry();
        let projector = SummaryProjector::new(&registry);

        assert_eq!(projector.student_rows(), projector.student_rows());
        assert_eq!(projector.department_rows(), projector.department_rows());
        assert_eq!(projector.instructor_rows(), projector.instructor_rows());
    }
}
