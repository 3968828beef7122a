//! Roster maintenance: adding and removing student records. Uses the same
//! `name words... group` line format as the transfer batches.

use crate::core::batch::{parse_student_line, BlockLine};
use crate::domain::model::{RosterReport, Student};

/// Appends new students, skipping `(name, group)` duplicates. New students
/// start unassigned.
pub fn add_students(students: &mut Vec<Student>, text: &str) -> RosterReport {
    let mut report = RosterReport::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_student_line(line) {
            BlockLine::Malformed(raw) => report.skipped.push(raw),
            BlockLine::Student { name, group } => {
                if students.iter().any(|s| s.name == name && s.group == group) {
                    report.skipped.push(format!("{} ({})", name, group));
                    continue;
                }
                students.push(Student {
                    name,
                    group,
                    course: String::new(),
                });
                report.changed += 1;
            }
        }
    }
    report
}

/// Removes the listed students; the literal `TODO` empties the whole
/// roster. Lines that match nobody are reported back as skipped.
pub fn remove_students(students: &mut Vec<Student>, text: &str) -> RosterReport {
    let mut report = RosterReport::default();
    if text.trim() == "TODO" {
        report.changed = students.len();
        students.clear();
        return report;
    }
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_student_line(line) {
            BlockLine::Malformed(raw) => report.skipped.push(raw),
            BlockLine::Student { name, group } => {
                let before = students.len();
                students.retain(|s| !(s.name == name && s.group == group));
                if students.len() == before {
                    report.skipped.push(format!("{} ({})", name, group));
                } else {
                    report.changed += 1;
                }
            }
        }
    }
    report
}
