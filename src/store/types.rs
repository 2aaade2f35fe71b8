//! Project record types.

use serde::{Deserialize, Serialize};

/// A house project tracked by the service.
///
/// The title is the record's key: it is unique within a store and never
/// changes once the project exists. Missing JSON fields fall back to their
/// zero values, so a body without a title decodes to a blank title rather
/// than a decode failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Unique, non-empty key.
    pub title: String,
    /// Estimated duration in days.
    pub duration_days: i64,
    /// Estimated cost.
    pub cost: f64,
    /// Free-form description.
    pub description: String,
}

impl Project {
    /// Create a project from its parts.
    pub fn new(
        title: impl Into<String>,
        duration_days: i64,
        cost: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            duration_days,
            cost,
            description: description.into(),
        }
    }

    /// Whether the title is empty.
    pub fn has_blank_title(&self) -> bool {
        self.title.is_empty()
    }

    /// Copy the mutable fields of `other` onto this record, keeping the title.
    pub(crate) fn apply_update(&mut self, other: &Project) {
        self.cost = other.cost;
        self.duration_days = other.duration_days;
        self.description.clone_from(&other.description);
    }
}
