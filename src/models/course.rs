//! Course record model.
//!
//! A course is an immutable catalog entry: identity, department, display
//! metadata, and a credit value. Prerequisites and term availability are
//! carried for display only — the planner never enforces them.
//!
//! # JSON Mapping
//! Field names follow the source catalog document (`courseCode` stays
//! camelCase on the wire). `prerequisites` and `terms` may be absent and
//! default to empty.

use serde::{Deserialize, Serialize};

/// A course offered in the catalog.
///
/// Immutable once loaded; the selection set stores clones of these records
/// so removal keeps working even if the catalog is replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Department name (grouping key).
    pub department: String,
    /// Course code (sort key, e.g. "CSCI-141").
    #[serde(rename = "courseCode")]
    pub course_code: String,
    /// Course title.
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Credit hours. Positive.
    pub credits: u32,
    /// Prerequisite course codes. Display only, not enforced.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Terms the course is offered in. Display only.
    #[serde(default)]
    pub terms: Vec<String>,
}

impl Course {
    /// Creates a new course with the given identity and credit value.
    pub fn new(id: impl Into<String>, course_code: impl Into<String>, credits: u32) -> Self {
        Self {
            id: id.into(),
            department: String::new(),
            course_code: course_code.into(),
            title: String::new(),
            description: String::new(),
            credits,
            prerequisites: Vec::new(),
            terms: Vec::new(),
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a prerequisite course code.
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.prerequisites.push(code.into());
        self
    }

    /// Adds an offering term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.terms.push(term.into());
        self
    }

    /// Whether this course has any prerequisites.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
