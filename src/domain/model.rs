use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seat capacity of a course. The on-disk format uses `-1` for unlimited,
/// which deserializes into the `Unlimited` variant so seat arithmetic never
/// touches a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Unlimited,
    Limited(u32),
}

impl Capacity {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Capacity::Unlimited)
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capacity::Unlimited => write!(f, "unlimited"),
            Capacity::Limited(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Capacity::Unlimited => serializer.serialize_i64(-1),
            Capacity::Limited(n) => serializer.serialize_i64(i64::from(*n)),
        }
    }
}

impl<'de> Deserialize<'de> for Capacity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            Ok(Capacity::Unlimited)
        } else {
            let n = u32::try_from(raw)
                .map_err(|_| D::Error::custom(format!("capacity out of range: {}", raw)))?;
            Ok(Capacity::Limited(n))
        }
    }
}

/// One elective course. Field names map to the original JSON keys.
/// Enrollment is not stored here; it is derived from the student records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "profesor")]
    pub instructor: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "relacionadas", default)]
    pub related_topics: Vec<String>,
    #[serde(rename = "plazas")]
    pub capacity: Capacity,
}

impl Course {
    /// Concatenated text used both for indexing and literal substring checks.
    pub fn full_text(&self) -> String {
        let mut text = format!("{} {} {}", self.name, self.instructor, self.description);
        if !self.related_topics.is_empty() {
            text.push(' ');
            text.push_str(&self.related_topics.join(" "));
        }
        text
    }
}

/// A student, identified by the `(name, group)` pair. An empty `course`
/// means the student is not assigned to any elective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "grupo")]
    pub group: String,
    #[serde(rename = "optativa", default)]
    pub course: String,
}

impl Student {
    pub fn is_assigned(&self) -> bool {
        !self.course.is_empty()
    }
}

/// Per-line failure inside a transfer batch. These are report values,
/// accumulated rather than aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferFailure {
    CourseNotFound { course: String },
    StudentNotFound { name: String, group: String },
    NoSeatsAvailable { name: String, group: String, course: String },
    MalformedLine { line: String },
}

impl std::fmt::Display for TransferFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferFailure::CourseNotFound { course } => {
                write!(f, "Course not found: {}", course)
            }
            TransferFailure::StudentNotFound { name, group } => {
                write!(f, "Student not found: {} ({})", name, group)
            }
            TransferFailure::NoSeatsAvailable { name, group, course } => {
                write!(f, "No seats available: {} ({}) -> {}", name, group, course)
            }
            TransferFailure::MalformedLine { line } => {
                write!(f, "Malformed line: {}", line)
            }
        }
    }
}

/// Outcome of one batch-transfer call.
#[derive(Debug, Clone, Default)]
pub struct TransferReport {
    pub assigned: usize,
    pub failures: Vec<TransferFailure>,
}

/// Outcome of a roster add/remove call.
#[derive(Debug, Clone, Default)]
pub struct RosterReport {
    pub changed: usize,
    pub skipped: Vec<String>,
}
