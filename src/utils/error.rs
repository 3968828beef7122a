use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("Catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CatalogError {
    /// Wraps any store-side failure so callers see a single load-error kind.
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        CatalogError::CatalogUnavailable {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
