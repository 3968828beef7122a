pub mod audit;
pub mod json_store;

pub use audit::AuditLog;
pub use json_store::JsonCatalogStore;
