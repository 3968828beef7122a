pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use file::FileConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct CliConfig {
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, default_value = "optativas.json")]
    pub courses_file: String,

    #[arg(long, default_value = "estudiantes.json")]
    pub students_file: String,

    #[arg(long, default_value = "registro.log")]
    pub audit_file: String,

    #[arg(long, help = "Operator name recorded in the audit log")]
    #[arg(default_value = "admin")]
    pub operator: String,

    #[arg(long, help = "Optional TOML config file; its values take precedence")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies the TOML file named by `--config`, if any.
    pub fn resolve(mut self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };
        let file = FileConfig::from_file(&path)?;
        if let Some(catalog) = file.catalog {
            if let Some(data_dir) = catalog.data_dir {
                self.data_dir = data_dir;
            }
            if let Some(courses_file) = catalog.courses_file {
                self.courses_file = courses_file;
            }
            if let Some(students_file) = catalog.students_file {
                self.students_file = students_file;
            }
        }
        if let Some(audit) = file.audit {
            if let Some(audit_file) = audit.file {
                self.audit_file = audit_file;
            }
            if let Some(operator) = audit.operator {
                self.operator = operator;
            }
        }
        Ok(self)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_non_empty_string("courses_file", &self.courses_file)?;
        validate_non_empty_string("students_file", &self.students_file)?;
        validate_non_empty_string("audit_file", &self.audit_file)?;
        validate_non_empty_string("operator", &self.operator)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn courses_file(&self) -> &str {
        &self.courses_file
    }

    fn students_file(&self) -> &str {
        &self.students_file
    }
}
