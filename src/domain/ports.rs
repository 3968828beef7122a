use crate::domain::model::{Course, Student};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Snapshot access to the catalog. Lists are loaded and replaced wholesale;
/// the store never sees partial state.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn load_courses(&self) -> Result<Vec<Course>>;
    async fn load_students(&self) -> Result<Vec<Student>>;
    async fn save_courses(&self, courses: &[Course]) -> Result<()>;
    async fn save_students(&self, students: &[Student]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn courses_file(&self) -> &str;
    fn students_file(&self) -> &str;
}
