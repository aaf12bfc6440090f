//! Mock timetable generation.
//!
//! Produces the synthetic weekly schedule the calendar view displays.
//! There is no real meeting-time data behind it: the generator assigns
//! selected courses to a fixed day/time grid by a frozen round-robin rule.
//!
//! # Contract
//!
//! The distribution rule is arbitrary but frozen — downstream renderers
//! depend on its exact output, so it must not be "improved" toward realism
//! without a product decision.

mod mock;

pub use mock::generate_mock_schedule;
