//! Task records and input normalization.
//!
//! A record's fields are fixed at creation; only `done` and its position in
//! the list change afterwards.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{Error, Result};

/// Priority of a task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(Error::InvalidArgument(format!(
                "unknown priority '{other}' (expected low|medium|high)"
            ))),
        }
    }
}

/// A single persisted task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Ulid,
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub priority: Priority,
}

impl TaskDraft {
    /// Normalize raw input: trim the title (rejecting empty), trim the
    /// description, and clean the tag list.
    pub fn new(
        title: &str,
        description: &str,
        tags: Vec<String>,
        priority: Priority,
    ) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            tags: normalize_tags(tags),
            priority,
        })
    }

    /// Materialize the draft into a record with a fresh id.
    pub fn into_record(self) -> TaskRecord {
        TaskRecord {
            id: Ulid::new(),
            title: self.title,
            description: self.description,
            tags: self.tags,
            priority: self.priority,
            done: false,
            created_at: Utc::now(),
        }
    }
}

/// Trim tags, drop empties, and dedupe exact duplicates.
///
/// Matches the original wire behavior: no lowercasing and no case-insensitive
/// dedupe, so "Work" and "work" remain distinct tags.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Split comma-separated tag input the way the original form field did.
pub fn split_tag_input(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.to_string()).collect()
}
