//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by the board columns.
//! - Provide lifecycle helpers for the Active/Finished status tag.
//!
//! # Invariants
//! - `id` is stable, non-nil, and never reused for another project.
//! - New projects always start in `ProjectStatus::Active`.
//! - No board operation transitions a project to `Finished`; the helpers
//!   below exist for embedders and tests that already own finished rows.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every project on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Column membership tag for a project.
///
/// The two values are mutually exclusive; each board column renders exactly
/// the projects carrying its own status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Listed in the active column; the only status the intake path assigns.
    Active,
    /// Listed in the finished column.
    Finished,
}

impl ProjectStatus {
    /// Stable string id used in logs and rendered column headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Canonical record for one unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for drag payloads, lookups and auditing.
    pub id: ProjectId,
    /// Short display title.
    pub title: String,
    /// Longer free-form description rendered in the row body.
    pub description: String,
    /// Head count assigned to the project.
    pub people: i64,
    /// Column membership tag.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID.
    ///
    /// # Invariants
    /// - The generated id is a fresh v4 UUID, never nil.
    /// - `status` starts as `ProjectStatus::Active`.
    /// - Field values are assumed pre-validated by the caller.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by embedders that already own an identity for the row.
    ///
    /// # Errors
    /// - Returns `ProjectModelError::NilId` for the nil UUID.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
    ) -> Result<Self, ProjectModelError> {
        if id.is_nil() {
            return Err(ProjectModelError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        })
    }

    /// Moves this project to the finished column.
    pub fn finish(&mut self) {
        self.status = ProjectStatus::Finished;
    }

    /// Moves this project back to the active column.
    pub fn reopen(&mut self) {
        self.status = ProjectStatus::Active;
    }

    /// Returns whether this project belongs to the active column.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Row display projection for the head count (`"1 person"`, `"3 persons"`).
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

/// Construction errors for caller-provided project identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectModelError {
    /// The nil UUID is reserved and never names a project.
    NilId,
}

impl Display for ProjectModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be the nil uuid"),
        }
    }
}

impl Error for ProjectModelError {}
