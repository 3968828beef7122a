pub mod batch;
pub mod engine;
pub mod index;
pub mod roster;
pub mod search;
pub mod transfer;

pub use crate::domain::model::{Capacity, Course, Student, TransferFailure, TransferReport};
pub use crate::domain::ports::{CatalogStore, ConfigProvider};
pub use crate::utils::error::Result;
