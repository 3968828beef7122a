pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{AuditLog, JsonCatalogStore};
pub use config::CliConfig;
pub use core::engine::{AssignOutcome, CatalogEngine};
pub use core::search::search;
pub use core::transfer::{clear_assignments, transfer_batch};
pub use domain::model::{Capacity, Course, Student, TransferFailure, TransferReport};
pub use utils::error::{CatalogError, Result};
