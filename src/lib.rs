//! Course registration planner core.
//!
//! Provides the headless logic behind a course registration browser:
//! a catalog of courses loaded from a JSON document, a credit-capped
//! selection set, and a synthetic weekly timetable for display. The
//! presentation layer (DOM, TUI, whatever) renders the session's queries
//! and feeds user actions back as toggles — no UI concern lives here.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Catalog`, `SelectionSet`,
//!   `Weekday`, `SlotTime`, `WeekGrid`
//! - **`scheduler`**: The mock timetable generator (a frozen display
//!   contract, not a scheduling engine)
//! - **`session`**: `PlannerSession`, the state owner and the boundary the
//!   presentation layer talks to
//! - **`validation`**: Catalog integrity checks (duplicate ids, zero
//!   credits, dangling prerequisites)
//!
//! # Example
//!
//! ```
//! use course_plan::session::{PlannerSession, ToggleOutcome};
//!
//! let json = r#"{"courses": [
//!     {"id": "c1", "department": "Computer Science", "courseCode": "CSCI-141",
//!      "title": "Computer Science I", "credits": 4}
//! ]}"#;
//!
//! let mut session = PlannerSession::from_json_str(json);
//! assert_eq!(session.toggle("c1").unwrap(), ToggleOutcome::Added);
//! assert_eq!(session.total_credits(), 4);
//! ```

pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;
