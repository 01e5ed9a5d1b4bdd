//! Requirement reconciliation between students and their majors
//!
//! Runs exactly once, after all four sources are ingested. For each student
//! the reconciler walks the major's required and elective course sets and
//! records which remain outstanding. The elective requirement short-circuits:
//! one passing grade in any elective clears it entirely.

use crate::app::services::registry_builder::Registry;
use crate::{Error, Result};
use tracing::debug;

/// Populate every student's remaining required and elective course lists.
///
/// A student whose major has no majors-file entry is a data-integrity
/// failure ([`Error::UnknownDepartment`]), not a silent skip. The remaining
/// lists are written once here and never mutated afterward; they are stored
/// in the department set's iteration order and sorted at projection time.
pub fn reconcile(registry: &mut Registry) -> Result<()> {
    let (students, departments) = registry.students_and_departments();

    for student in students.values_mut() {
        let department = departments
            .get(&student.major)
            .ok_or_else(|| Error::unknown_department(&student.major, &student.cwid))?;

        let remaining_required: Vec<String> = department
            .required_courses()
            .filter(|course| !student.has_passed(course))
            .cloned()
            .collect();

        // One passed elective satisfies the whole elective requirement
        let elective_satisfied = department
            .elective_courses()
            .any(|course| student.has_passed(course));

        let remaining_elective: Vec<String> = if elective_satisfied {
            Vec::new()
        } else {
            department.elective_courses().cloned().collect()
        };

        debug!(
            "Reconciled {}: {} required and {} elective courses outstanding",
            student.cwid,
            remaining_required.len(),
            remaining_elective.len()
        );

        student.remaining_required = remaining_required;
        student.remaining_elective = remaining_elective;
    }

    Ok(())
}
