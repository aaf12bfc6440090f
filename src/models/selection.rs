//! Selection set model.
//!
//! The selection set holds the user's currently chosen courses and enforces
//! the credit-cap invariant: the sum of credits over all members never
//! exceeds the cap. The invariant is enforced at insertion time — removal
//! is always unconditional.
//!
//! # Ordering
//! Members keep insertion order, which is what the mock scheduler consumes.
//! Display lists use [`SelectionSet::sorted_by_code`] instead.

use thiserror::Error;

use super::Course;

/// Maximum total credits a selection may carry.
pub const MAX_CREDITS: u32 = 18;

/// Rejected mutation of a selection set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Adding the course would push the credit total past the cap.
    #[error(
        "adding '{course_id}' ({credits} cr) would exceed the {cap}-credit limit \
         (currently {total} cr)"
    )]
    CreditLimitExceeded {
        course_id: String,
        credits: u32,
        total: u32,
        cap: u32,
    },
}

/// An ordered set of chosen courses, unique by id, capped by total credits.
#[derive(Debug, Clone)]
pub struct SelectionSet {
    courses: Vec<Course>,
    cap: u32,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSet {
    /// Creates an empty selection with the standard credit cap.
    pub fn new() -> Self {
        Self::with_cap(MAX_CREDITS)
    }

    /// Creates an empty selection with a custom credit cap.
    pub fn with_cap(cap: u32) -> Self {
        Self {
            courses: Vec::new(),
            cap,
        }
    }

    /// The credit cap.
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Sum of credits over all selected courses.
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Whether adding `course` would stay within the cap.
    ///
    /// Pure query; does not consider whether the course is already selected.
    /// A credit value large enough to overflow the running total can never
    /// fit under the cap.
    pub fn can_add(&self, course: &Course) -> bool {
        self.total_credits()
            .checked_add(course.credits)
            .is_some_and(|total| total <= self.cap)
    }

    /// Whether a course id is currently selected.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }

    /// Adds a course to the selection.
    ///
    /// Fails with [`SelectionError::CreditLimitExceeded`] if the cap would
    /// be exceeded; the set is unchanged on failure. Inserting an already
    /// selected id is a no-op `Ok`.
    pub fn insert(&mut self, course: Course) -> Result<(), SelectionError> {
        if self.contains(&course.id) {
            return Ok(());
        }
        if !self.can_add(&course) {
            return Err(SelectionError::CreditLimitExceeded {
                course_id: course.id,
                credits: course.credits,
                total: self.total_credits(),
                cap: self.cap,
            });
        }
        self.courses.push(course);
        Ok(())
    }

    /// Removes a course by id. Always succeeds for present ids,
    /// independent of the catalog's current contents.
    pub fn remove(&mut self, course_id: &str) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.id == course_id)?;
        Some(self.courses.remove(index))
    }

    /// Number of selected courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether no courses are selected.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Selected courses in insertion order (the scheduler's input order).
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Selected courses sorted ascending by course code, for display.
    pub fn sorted_by_code(&self) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.courses.iter().collect();
        sorted.sort_by(|a, b| a.course_code.cmp(&b.course_code));
        sorted
    }
}
