use crate::domain::model::{Course, Student};
use crate::domain::ports::{CatalogStore, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed catalog store: one JSON array per list, replaced wholesale
/// on save. A missing file loads as the empty list; anything else (bad
/// JSON, unreadable file) is an error the engine reports as an unavailable
/// catalog.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    courses_path: PathBuf,
    students_path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(config: &impl ConfigProvider) -> Self {
        let base = Path::new(config.data_dir());
        Self {
            courses_path: base.join(config.courses_file()),
            students_path: base.join(config.students_file()),
        }
    }

    pub fn with_paths(courses_path: impl Into<PathBuf>, students_path: impl Into<PathBuf>) -> Self {
        Self {
            courses_path: courses_path.into(),
            students_path: students_path.into(),
        }
    }

    fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            tracing::debug!("{} does not exist yet, loading empty list", path.display());
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_list<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for JsonCatalogStore {
    async fn load_courses(&self) -> Result<Vec<Course>> {
        Self::read_list(&self.courses_path)
    }

    async fn load_students(&self) -> Result<Vec<Student>> {
        Self::read_list(&self.students_path)
    }

    async fn save_courses(&self, courses: &[Course]) -> Result<()> {
        Self::write_list(&self.courses_path, courses)
    }

    async fn save_students(&self, students: &[Student]) -> Result<()> {
        Self::write_list(&self.students_path, students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Capacity;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonCatalogStore {
        JsonCatalogStore::with_paths(
            dir.path().join("optativas.json"),
            dir.path().join("estudiantes.json"),
        )
    }

    #[tokio::test]
    async fn missing_files_load_as_empty_lists() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load_courses().await.unwrap().is_empty());
        assert!(store.load_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn courses_round_trip_through_the_original_format() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let courses = vec![Course {
            name: "Robótica".to_string(),
            instructor: "García".to_string(),
            description: "Robots móviles".to_string(),
            related_topics: vec!["electrónica".to_string()],
            capacity: Capacity::Unlimited,
        }];
        store.save_courses(&courses).await.unwrap();

        // On disk: original Spanish keys and the -1 capacity sentinel.
        let raw = std::fs::read_to_string(dir.path().join("optativas.json")).unwrap();
        assert!(raw.contains("\"nombre\""));
        assert!(raw.contains("\"plazas\": -1"));

        let loaded = store.load_courses().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Robótica");
        assert_eq!(loaded[0].capacity, Capacity::Unlimited);
    }

    #[tokio::test]
    async fn students_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let students = vec![Student {
            name: "Ana López".to_string(),
            group: "4B".to_string(),
            course: "Robótica".to_string(),
        }];
        store.save_students(&students).await.unwrap();
        let loaded = store.load_students().await.unwrap();
        assert_eq!(loaded, students);
    }

    #[tokio::test]
    async fn corrupt_json_is_an_error_not_an_empty_list() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("optativas.json"), "not json").unwrap();
        let store = store_in(&dir);
        assert!(store.load_courses().await.is_err());
    }
}
