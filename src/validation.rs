//! Catalog integrity checks.
//!
//! Checks the structural integrity of a loaded catalog before it is shown:
//! - Duplicate course ids and course codes
//! - Empty ids
//! - Zero credit values
//! - Prerequisite codes that match no catalog course
//!
//! Diagnostics only: the session never consults these before mutating, and
//! prerequisites in particular stay display-only even when they dangle.

use std::collections::HashSet;

use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same id.
    DuplicateId,
    /// Two courses share the same course code.
    DuplicateCode,
    /// A course has an empty id.
    MissingId,
    /// A course carries zero credits.
    ZeroCredits,
    /// A prerequisite references a code not present in the catalog.
    UnknownPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a loaded catalog.
///
/// Checks:
/// 1. Every course has a non-empty id
/// 2. No duplicate course ids
/// 3. No duplicate course codes
/// 4. Every course carries at least one credit
/// 5. Every prerequisite code matches some course in the catalog
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    let mut codes = HashSet::new();

    for course in catalog.courses() {
        if course.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Course '{}' has an empty id", course.course_code),
            ));
        }

        if !course.id.is_empty() && !ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course id: {}", course.id),
            ));
        }

        if !codes.insert(course.course_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.course_code),
            ));
        }

        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCredits,
                format!("Course '{}' carries zero credits", course.course_code),
            ));
        }
    }

    for course in catalog.courses() {
        for prereq in &course.prerequisites {
            if !codes.contains(prereq.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrerequisite,
                    format!(
                        "Course '{}' lists unknown prerequisite '{}'",
                        course.course_code, prereq
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
