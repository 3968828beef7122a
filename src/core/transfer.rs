use crate::core::batch::{BlockLine, TransferBatch};
use crate::domain::model::{Capacity, Course, Student, TransferFailure, TransferReport};
use std::collections::HashMap;

fn norm(name: &str) -> String {
    name.to_lowercase()
}

/// Applies a tokenized transfer batch against the in-memory snapshot.
///
/// Blocks are processed in order. A block whose course cannot be resolved
/// fails as a whole; student-level problems fail line by line and never
/// abort the rest of the batch. Every successful reassignment releases the
/// old seat and takes the new one in the same step, so enrollment never
/// exceeds a limited course's capacity at any point a caller can observe.
///
/// Only the student records change; enrollment is derived from them, so the
/// course list stays read-only.
pub fn transfer_batch(
    courses: &[Course],
    students: &mut [Student],
    batch: &TransferBatch,
) -> TransferReport {
    let mut report = TransferReport::default();

    // Enrollment counts by normalized course name, kept current as the
    // batch mutates assignments.
    let mut enrolled: HashMap<String, u32> = HashMap::new();
    for student in students.iter() {
        if student.is_assigned() {
            *enrolled.entry(norm(&student.course)).or_insert(0) += 1;
        }
    }

    for block in &batch.blocks {
        let Some(course) = courses
            .iter()
            .find(|c| norm(&c.name) == norm(&block.course))
        else {
            report.failures.push(TransferFailure::CourseNotFound {
                course: block.course.clone(),
            });
            continue;
        };

        for line in &block.lines {
            let (name, group) = match line {
                BlockLine::Student { name, group } => (name, group),
                BlockLine::Malformed(raw) => {
                    report
                        .failures
                        .push(TransferFailure::MalformedLine { line: raw.clone() });
                    continue;
                }
            };

            let Some(student) = students
                .iter_mut()
                .find(|s| s.name == *name && s.group == *group)
            else {
                report.failures.push(TransferFailure::StudentNotFound {
                    name: name.clone(),
                    group: group.clone(),
                });
                continue;
            };

            if norm(&student.course) == norm(&course.name) {
                // Already holds a seat here.
                continue;
            }

            if let Capacity::Limited(cap) = course.capacity {
                let taken = enrolled.get(&norm(&course.name)).copied().unwrap_or(0);
                if taken >= cap {
                    report.failures.push(TransferFailure::NoSeatsAvailable {
                        name: name.clone(),
                        group: group.clone(),
                        course: course.name.clone(),
                    });
                    continue;
                }
            }

            // Atomic swap: release the old seat, take the new one and
            // rewrite the assignment with no step in between.
            if student.is_assigned() {
                if let Some(count) = enrolled.get_mut(&norm(&student.course)) {
                    *count = count.saturating_sub(1);
                }
            }
            *enrolled.entry(norm(&course.name)).or_insert(0) += 1;
            student.course = course.name.clone();
            report.assigned += 1;
        }
    }

    for raw in &batch.dangling {
        report
            .failures
            .push(TransferFailure::MalformedLine { line: raw.clone() });
    }

    tracing::debug!(
        "Batch done: {} assigned, {} failure(s)",
        report.assigned,
        report.failures.len()
    );
    report
}

/// Whole-catalog clear: every student loses their assignment, every seat is
/// released. Returns how many assignments were removed.
pub fn clear_assignments(students: &mut [Student]) -> usize {
    let mut cleared = 0;
    for student in students.iter_mut() {
        if student.is_assigned() {
            student.course.clear();
            cleared += 1;
        }
    }
    cleared
}
