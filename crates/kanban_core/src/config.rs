//! Board session configuration.
//!
//! # Responsibility
//! - Hold host-tunable labels used by board commands.
//! - Deserialize from any serde format with per-field defaults.

use serde::{Deserialize, Serialize};

const DEFAULT_COLUMN_TITLE_PREFIX: &str = "Column";
const DEFAULT_TASK_CONTENT_PREFIX: &str = "Task";

/// Labels applied to auto-created columns and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// New columns are titled `"{prefix} {n}"`.
    pub column_title_prefix: String,
    /// New tasks get content `"{prefix} {n}"`.
    pub task_content_prefix: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title_prefix: DEFAULT_COLUMN_TITLE_PREFIX.to_string(),
            task_content_prefix: DEFAULT_TASK_CONTENT_PREFIX.to_string(),
        }
    }
}

impl BoardConfig {
    /// Title for a column created when `existing` columns are present.
    pub fn column_title(&self, existing: usize) -> String {
        format!("{} {}", self.column_title_prefix, existing + 1)
    }

    /// Content for a task created when `existing` tasks are present.
    pub fn task_content(&self, existing: usize) -> String {
        format!("{} {}", self.task_content_prefix, existing + 1)
    }
}
