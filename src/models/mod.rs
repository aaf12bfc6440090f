//! Course planning domain models.
//!
//! Provides the core data types for browsing a course catalog, maintaining
//! a credit-capped selection, and rendering a synthetic weekly timetable.
//!
//! # Lifecycle
//!
//! The [`Catalog`] is loaded once at startup and never mutated. The
//! [`SelectionSet`] starts empty, changes only through discrete toggle
//! operations, and lives for the session. The [`WeekGrid`] is derived
//! output, recomputed whenever the calendar view refreshes.

mod catalog;
mod course;
mod selection;
mod timetable;

pub use catalog::{Catalog, CatalogError};
pub use course::Course;
pub use selection::{SelectionError, SelectionSet, MAX_CREDITS};
pub use timetable::{SlotTime, WeekGrid, Weekday};
