use crate::core::batch::{parse_batch, BatchInstruction};
use crate::core::{roster, search, transfer};
use crate::domain::model::{Course, RosterReport, Student, TransferReport};
use crate::domain::ports::CatalogStore;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation;

/// What an assignment request turned out to be.
#[derive(Debug)]
pub enum AssignOutcome {
    /// The `TODO` bulk clear: number of assignments removed.
    Cleared(usize),
    Transferred(TransferReport),
}

/// Wires the catalog store to the search and transfer engines. Each call
/// loads a fresh snapshot, runs the pure computation and, for mutations,
/// writes the replacement list back before returning, so the whole
/// load-compute-save sequence stays inside one call. Callers needing
/// multi-process safety must still serialize writers externally.
pub struct CatalogEngine<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn courses(&self) -> Result<Vec<Course>> {
        self.store
            .load_courses()
            .await
            .map_err(CatalogError::unavailable)
    }

    async fn students(&self) -> Result<Vec<Student>> {
        self.store
            .load_students()
            .await
            .map_err(CatalogError::unavailable)
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        self.courses().await
    }

    pub async fn list_students(&self) -> Result<Vec<Student>> {
        self.students().await
    }

    /// Ranked full-text search over the current catalog.
    pub async fn search(&self, query: &str) -> Result<Vec<Course>> {
        let courses = self.courses().await?;
        tracing::debug!("Searching {} course(s)", courses.len());
        search::search(&courses, query)
    }

    /// Runs a batch assignment (or the `TODO` bulk clear) and persists the
    /// updated student list.
    pub async fn assign(&self, batch_text: &str) -> Result<AssignOutcome> {
        let courses = self.courses().await?;
        let mut students = self.students().await?;

        let outcome = match parse_batch(batch_text) {
            BatchInstruction::ClearAll => {
                let cleared = transfer::clear_assignments(&mut students);
                tracing::info!("Cleared {} assignment(s)", cleared);
                AssignOutcome::Cleared(cleared)
            }
            BatchInstruction::Transfer(batch) => {
                let report = transfer::transfer_batch(&courses, &mut students, &batch);
                tracing::info!(
                    "Assigned {} student(s), {} failure(s)",
                    report.assigned,
                    report.failures.len()
                );
                AssignOutcome::Transferred(report)
            }
        };

        self.store.save_students(&students).await?;
        Ok(outcome)
    }

    pub async fn add_students(&self, text: &str) -> Result<RosterReport> {
        let mut students = self.students().await?;
        let report = roster::add_students(&mut students, text);
        tracing::info!("Added {} student(s)", report.changed);
        self.store.save_students(&students).await?;
        Ok(report)
    }

    pub async fn remove_students(&self, text: &str) -> Result<RosterReport> {
        let mut students = self.students().await?;
        let report = roster::remove_students(&mut students, text);
        tracing::info!("Removed {} student(s)", report.changed);
        self.store.save_students(&students).await?;
        Ok(report)
    }

    /// Replaces the whole course catalog after validating the upload.
    pub async fn replace_courses(&self, courses: Vec<Course>) -> Result<usize> {
        validation::validate_courses(&courses)?;
        self.store.save_courses(&courses).await?;
        tracing::info!("Catalog replaced: {} course(s)", courses.len());
        Ok(courses.len())
    }

    /// Replaces the whole student roster after validating the upload.
    pub async fn replace_students(&self, students: Vec<Student>) -> Result<usize> {
        validation::validate_students(&students)?;
        self.store.save_students(&students).await?;
        tracing::info!("Roster replaced: {} student(s)", students.len());
        Ok(students.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Capacity;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStore {
        courses: Arc<Mutex<Vec<Course>>>,
        students: Arc<Mutex<Vec<Student>>>,
        fail_loads: bool,
    }

    #[async_trait]
    impl CatalogStore for MemoryStore {
        async fn load_courses(&self) -> Result<Vec<Course>> {
            if self.fail_loads {
                return Err(CatalogError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "missing courses file",
                )));
            }
            Ok(self.courses.lock().await.clone())
        }

        async fn load_students(&self) -> Result<Vec<Student>> {
            if self.fail_loads {
                return Err(CatalogError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "missing students file",
                )));
            }
            Ok(self.students.lock().await.clone())
        }

        async fn save_courses(&self, courses: &[Course]) -> Result<()> {
            *self.courses.lock().await = courses.to_vec();
            Ok(())
        }

        async fn save_students(&self, students: &[Student]) -> Result<()> {
            *self.students.lock().await = students.to_vec();
            Ok(())
        }
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::default();
        let courses = vec![Course {
            name: "Robotics".to_string(),
            instructor: "García".to_string(),
            description: "Mobile robots and sensors".to_string(),
            related_topics: vec!["electronics".to_string()],
            capacity: Capacity::Limited(1),
        }];
        let students = vec![Student {
            name: "Ana López".to_string(),
            group: "4B".to_string(),
            course: String::new(),
        }];
        *store.courses.try_lock().unwrap() = courses;
        *store.students.try_lock().unwrap() = students;
        store
    }

    #[tokio::test]
    async fn search_goes_through_the_store() {
        let engine = CatalogEngine::new(seeded_store());
        let results = engine.search("robotics").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Robotics");
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_catalog_unavailable() {
        let store = MemoryStore {
            fail_loads: true,
            ..MemoryStore::default()
        };
        let engine = CatalogEngine::new(store);
        let err = engine.search("robotics").await.unwrap_err();
        assert!(matches!(err, CatalogError::CatalogUnavailable { .. }));
    }

    #[tokio::test]
    async fn assign_persists_the_mutated_roster() {
        let store = seeded_store();
        let engine = CatalogEngine::new(store.clone());
        let outcome = engine.assign("Ana López 4B\n- Robotics").await.unwrap();
        let AssignOutcome::Transferred(report) = outcome else {
            panic!("expected a transfer outcome");
        };
        assert_eq!(report.assigned, 1);

        let saved = store.students.lock().await;
        assert_eq!(saved[0].course, "Robotics");
    }

    #[tokio::test]
    async fn todo_clears_and_persists() {
        let store = seeded_store();
        store.students.lock().await[0].course = "Robotics".to_string();
        let engine = CatalogEngine::new(store.clone());

        let outcome = engine.assign("TODO").await.unwrap();
        assert!(matches!(outcome, AssignOutcome::Cleared(1)));
        assert!(!store.students.lock().await[0].is_assigned());
    }

    #[tokio::test]
    async fn invalid_catalog_upload_is_rejected_before_saving() {
        let store = seeded_store();
        let engine = CatalogEngine::new(store.clone());
        let bad = vec![Course {
            name: String::new(),
            instructor: "X".to_string(),
            description: String::new(),
            related_topics: vec![],
            capacity: Capacity::Unlimited,
        }];
        assert!(engine.replace_courses(bad).await.is_err());
        // Old catalog untouched.
        assert_eq!(store.courses.lock().await.len(), 1);
    }
}
