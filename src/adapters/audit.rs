use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Caps the audit file so it never grows without bound.
const MAX_ENTRIES: usize = 999;

/// Append-only operator audit trail. A failed write is logged and
/// swallowed; auditing must never make an operation fail.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn record(&self, operator: &str, action: &str) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M");
        let line = format!("[{}] '{}' {}", stamp, operator, action);
        if let Err(err) = self.append(&line) {
            tracing::warn!("Could not write audit entry: {}", err);
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut lines: Vec<String> = if Path::new(&self.path).exists() {
            fs::read_to_string(&self.path)?
                .lines()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };
        if lines.len() >= MAX_ENTRIES {
            lines.drain(..lines.len() + 1 - MAX_ENTRIES);
        }
        lines.push(line.to_string());
        fs::write(&self.path, lines.join("\n") + "\n")
    }
}
