//! Planner session controller.
//!
//! Owns the catalog and the selection set for one registration session and
//! exposes the full query/command surface the presentation layer renders
//! from. All mutation goes through [`PlannerSession::toggle`]; the caller
//! re-reads the derived queries (credit total, selectability, schedule)
//! after every accepted toggle.
//!
//! # Degraded State
//!
//! When the catalog document cannot be loaded, the session starts with an
//! empty catalog and retains the load error. Every toggle is then a
//! structural no-op and every view query comes back empty; the caller shows
//! a "catalog unavailable" message and offers a restart. There is no retry.

use std::path::Path;

use log::{debug, error, warn};

use crate::models::{Catalog, CatalogError, Course, SelectionError, SelectionSet, WeekGrid};
use crate::scheduler::generate_mock_schedule;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The course was added to the selection.
    Added,
    /// The course was removed from the selection.
    Removed,
    /// The id matched nothing — neither the selection nor the catalog.
    Ignored,
}

/// One user's registration session: catalog plus selection.
#[derive(Debug)]
pub struct PlannerSession {
    catalog: Catalog,
    selection: SelectionSet,
    load_failure: Option<CatalogError>,
}

impl PlannerSession {
    /// Creates a session over an already-loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionSet::new(),
            load_failure: None,
        }
    }

    /// Creates a degraded session after a failed catalog load.
    pub fn degraded(error: CatalogError) -> Self {
        Self {
            catalog: Catalog::empty(),
            selection: SelectionSet::new(),
            load_failure: Some(error),
        }
    }

    /// Parses the catalog document and starts a session.
    ///
    /// A malformed document yields a degraded session, not an error: the
    /// UI stays up and reports the failure.
    pub fn from_json_str(json: &str) -> Self {
        match Catalog::from_json_str(json) {
            Ok(catalog) => Self::new(catalog),
            Err(err) => {
                error!("catalog load failed: {err}");
                Self::degraded(err)
            }
        }
    }

    /// Loads the catalog document from disk and starts a session.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Catalog::load(path) {
            Ok(catalog) => Self::new(catalog),
            Err(err) => {
                error!("catalog load failed: {err}");
                Self::degraded(err)
            }
        }
    }

    /// Whether the catalog failed to load.
    pub fn is_degraded(&self) -> bool {
        self.load_failure.is_some()
    }

    /// The load error, if the session is degraded.
    pub fn load_failure(&self) -> Option<&CatalogError> {
        self.load_failure.as_ref()
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Sum of credits over the selection.
    pub fn total_credits(&self) -> u32 {
        self.selection.total_credits()
    }

    /// Whether the credit total has reached the cap (drives the limit
    /// styling in the credit counter).
    pub fn at_credit_limit(&self) -> bool {
        self.selection.total_credits() >= self.selection.cap()
    }

    /// Whether adding `course` would stay within the cap.
    pub fn can_add(&self, course: &Course) -> bool {
        self.selection.can_add(course)
    }

    /// Whether a course card should be enabled: already selected, or still
    /// affordable under the cap.
    pub fn is_selectable(&self, course: &Course) -> bool {
        self.selection.contains(&course.id) || self.selection.can_add(course)
    }

    /// Toggles a course in or out of the selection.
    ///
    /// A selected id is removed unconditionally, even if the catalog no
    /// longer lists it. An id unknown to both the selection and the catalog
    /// is silently ignored. Adding fails with
    /// [`SelectionError::CreditLimitExceeded`] when the cap would be
    /// exceeded, leaving the selection unchanged.
    pub fn toggle(&mut self, course_id: &str) -> Result<ToggleOutcome, SelectionError> {
        if self.selection.contains(course_id) {
            self.selection.remove(course_id);
            debug!("deselected course '{course_id}', total now {}", self.total_credits());
            return Ok(ToggleOutcome::Removed);
        }

        let Some(course) = self.catalog.find(course_id) else {
            return Ok(ToggleOutcome::Ignored);
        };

        match self.selection.insert(course.clone()) {
            Ok(()) => {
                debug!("selected course '{course_id}', total now {}", self.total_credits());
                Ok(ToggleOutcome::Added)
            }
            Err(err) => {
                warn!("toggle rejected: {err}");
                Err(err)
            }
        }
    }

    /// Looks up a course by id (backs the detail view).
    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.catalog.find(course_id)
    }

    /// Catalog grouped by department, sorted for display.
    pub fn courses_by_department(&self) -> Vec<(&str, Vec<&Course>)> {
        self.catalog.by_department()
    }

    /// Selected courses sorted by course code, for the selection list.
    pub fn selected_courses(&self) -> Vec<&Course> {
        self.selection.sorted_by_code()
    }

    /// The mock weekly schedule for the current selection.
    ///
    /// Recomputed from scratch on every call, from the selection's
    /// insertion order.
    pub fn mock_schedule(&self) -> WeekGrid {
        generate_mock_schedule(self.selection.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SlotTime, Weekday};

    fn course(id: &str, code: &str, dept: &str, credits: u32) -> Course {
        Course::new(id, code, credits).with_department(dept)
    }

    fn sample_session() -> PlannerSession {
        PlannerSession::new(Catalog::new(vec![
            course("A", "CSCI-141", "Computer Science", 10),
            course("B", "MATH-181", "Mathematics", 9),
            course("C", "ARTH-135", "Art History", 5),
        ]))
    }

    #[test]
    fn test_toggle_add_remove_roundtrip() {
        let mut session = sample_session();

        assert_eq!(session.toggle("A").unwrap(), ToggleOutcome::Added);
        assert_eq!(session.total_credits(), 10);

        assert_eq!(session.toggle("A").unwrap(), ToggleOutcome::Removed);
        assert_eq!(session.total_credits(), 0);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let mut session = sample_session();
        assert_eq!(session.toggle("nope").unwrap(), ToggleOutcome::Ignored);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_toggle_scenario_over_cap() {
        let mut session = sample_session();

        session.toggle("A").unwrap(); // 10
        let err = session.toggle("B").unwrap_err(); // 10 + 9 = 19 > 18
        assert!(matches!(err, SelectionError::CreditLimitExceeded { .. }));
        assert_eq!(session.total_credits(), 10);

        session.toggle("C").unwrap(); // 10 + 5 = 15
        assert_eq!(session.total_credits(), 15);
    }

    #[test]
    fn test_remove_survives_catalog_changes() {
        let mut session = sample_session();
        session.toggle("A").unwrap();

        // Catalog swapped out from under the selection
        session.catalog = Catalog::empty();

        assert_eq!(session.toggle("A").unwrap(), ToggleOutcome::Removed);
        assert_eq!(session.total_credits(), 0);
    }

    #[test]
    fn test_is_selectable() {
        let mut session = sample_session();
        session.toggle("A").unwrap(); // total 10

        let a = course("A", "CSCI-141", "Computer Science", 10);
        let b = course("B", "MATH-181", "Mathematics", 9);
        let c = course("C", "ARTH-135", "Art History", 5);

        assert!(session.is_selectable(&a)); // already selected
        assert!(!session.is_selectable(&b)); // would exceed cap
        assert!(session.is_selectable(&c)); // still affordable
    }

    #[test]
    fn test_at_credit_limit() {
        let mut session = PlannerSession::new(Catalog::new(vec![course(
            "full", "LOAD-900", "Overload", 18,
        )]));
        assert!(!session.at_credit_limit());
        session.toggle("full").unwrap();
        assert!(session.at_credit_limit());
    }

    #[test]
    fn test_views() {
        let mut session = sample_session();
        session.toggle("B").unwrap();
        session.toggle("C").unwrap();

        // Selection list is sorted by course code, not toggle order
        let selected: Vec<&str> = session
            .selected_courses()
            .iter()
            .map(|c| c.course_code.as_str())
            .collect();
        assert_eq!(selected, vec!["ARTH-135", "MATH-181"]);

        // Catalog view groups by department, departments sorted
        let depts: Vec<&str> = session
            .courses_by_department()
            .iter()
            .map(|(d, _)| *d)
            .collect();
        assert_eq!(
            depts,
            vec!["Art History", "Computer Science", "Mathematics"]
        );
    }

    #[test]
    fn test_mock_schedule_uses_toggle_order() {
        let mut session = sample_session();
        session.toggle("B").unwrap(); // index 0 → MWF 9:00 AM
        session.toggle("C").unwrap(); // index 1 → TuTh 2:00 PM

        let grid = session.mock_schedule();
        assert_eq!(
            grid.courses_at(Weekday::Monday, SlotTime::on_hour(9))[0].id,
            "B"
        );
        assert_eq!(
            grid.courses_at(Weekday::Thursday, SlotTime::on_hour(14))[0].id,
            "C"
        );
    }

    #[test]
    fn test_empty_selection_empty_schedule() {
        let session = sample_session();
        assert!(session.mock_schedule().is_empty());
    }

    #[test]
    fn test_degraded_session() {
        let mut session = PlannerSession::from_json_str("{ broken");
        assert!(session.is_degraded());
        assert!(matches!(
            session.load_failure(),
            Some(CatalogError::Parse(_))
        ));

        assert!(session.catalog().is_empty());
        assert!(session.courses_by_department().is_empty());
        assert_eq!(session.toggle("A").unwrap(), ToggleOutcome::Ignored);
        assert_eq!(session.total_credits(), 0);
        assert!(session.mock_schedule().is_empty());
    }

    #[test]
    fn test_from_json_str_happy_path() {
        let json = r#"{
            "courses": [
                {"id": "A", "department": "Physics", "courseCode": "PHYS-211",
                 "title": "University Physics I", "credits": 4}
            ]
        }"#;

        let mut session = PlannerSession::from_json_str(json);
        assert!(!session.is_degraded());
        assert_eq!(session.toggle("A").unwrap(), ToggleOutcome::Added);
        assert_eq!(session.total_credits(), 4);
    }
}
