use crate::domain::model::{Course, Student};
use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }
    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }
    Ok(())
}

/// Checks a replacement course list before it overwrites the catalog:
/// every course needs a name and an instructor, and names must be unique
/// ignoring case.
pub fn validate_courses(courses: &[Course]) -> Result<()> {
    let mut seen: HashSet<String> = HashSet::new();
    for (i, course) in courses.iter().enumerate() {
        if course.name.trim().is_empty() {
            return Err(CatalogError::ValidationError {
                message: format!("Course #{} has an empty name", i + 1),
            });
        }
        if course.instructor.trim().is_empty() {
            return Err(CatalogError::ValidationError {
                message: format!("Course '{}' has an empty instructor", course.name),
            });
        }
        if !seen.insert(course.name.to_lowercase()) {
            return Err(CatalogError::ValidationError {
                message: format!("Duplicate course name: {}", course.name),
            });
        }
    }
    Ok(())
}

/// Checks a replacement student roster: names and groups must be non-empty
/// and `(name, group)` pairs unique.
pub fn validate_students(students: &[Student]) -> Result<()> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for (i, student) in students.iter().enumerate() {
        if student.name.trim().is_empty() || student.group.trim().is_empty() {
            return Err(CatalogError::ValidationError {
                message: format!("Student #{} is missing name or group", i + 1),
            });
        }
        if !seen.insert((student.name.clone(), student.group.clone())) {
            return Err(CatalogError::ValidationError {
                message: format!("Duplicate student: {} ({})", student.name, student.group),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Capacity;

    fn course(name: &str, instructor: &str) -> Course {
        Course {
            name: name.to_string(),
            instructor: instructor.to_string(),
            description: String::new(),
            related_topics: vec![],
            capacity: Capacity::Unlimited,
        }
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Robotics").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", "./data").is_ok());
        assert!(validate_path("data_dir", "").is_err());
    }

    #[test]
    fn course_names_must_be_unique_ignoring_case() {
        let courses = vec![course("Robotics", "A"), course("rObOtIcS", "B")];
        assert!(validate_courses(&courses).is_err());
    }

    #[test]
    fn valid_catalog_passes() {
        let courses = vec![course("Robotics", "A"), course("Choir", "B")];
        assert!(validate_courses(&courses).is_ok());
    }

    #[test]
    fn empty_instructor_is_rejected() {
        assert!(validate_courses(&[course("Robotics", " ")]).is_err());
    }

    #[test]
    fn duplicate_students_are_rejected() {
        let s = Student {
            name: "Ana".to_string(),
            group: "4B".to_string(),
            course: String::new(),
        };
        assert!(validate_students(&[s.clone(), s]).is_err());
    }
}
