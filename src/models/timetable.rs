//! Weekly timetable models.
//!
//! Defines the display grid the calendar view renders: weekdays, on-the-hour
//! time slots, and the (day, time) → courses mapping produced by the mock
//! scheduler. A cell may hold zero, one, or several courses — there is no
//! conflict detection anywhere in this crate.
//!
//! # Time Model
//! Slots are whole hours in 24-hour form; [`SlotTime::label`] renders the
//! 12-hour strings the calendar displays ("9:00 AM", "1:00 PM").

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Course;

/// A weekday of the five-day academic week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// The week in display order.
    pub const WEEK: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

/// An on-the-hour time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotTime {
    /// Hour in 24-hour form (0..=23).
    hour: u8,
}

impl SlotTime {
    /// Creates a slot at the given 24-hour hour.
    pub const fn on_hour(hour: u8) -> Self {
        Self { hour }
    }

    /// The hour in 24-hour form.
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// The calendar's rendering rows, 8:00 AM through 7:00 PM.
    pub const DAY_GRID: [SlotTime; 12] = [
        SlotTime::on_hour(8),
        SlotTime::on_hour(9),
        SlotTime::on_hour(10),
        SlotTime::on_hour(11),
        SlotTime::on_hour(12),
        SlotTime::on_hour(13),
        SlotTime::on_hour(14),
        SlotTime::on_hour(15),
        SlotTime::on_hour(16),
        SlotTime::on_hour(17),
        SlotTime::on_hour(18),
        SlotTime::on_hour(19),
    ];

    /// 12-hour display label, e.g. "9:00 AM", "12:00 PM", "1:00 PM".
    pub fn label(self) -> String {
        let (hour, meridiem) = match self.hour {
            0 => (12, "AM"),
            1..=11 => (self.hour, "AM"),
            12 => (12, "PM"),
            _ => (self.hour - 12, "PM"),
        };
        format!("{hour}:00 {meridiem}")
    }
}

/// A weekly timetable: (day, time) → courses meeting in that cell.
///
/// Produced by the mock scheduler, recomputed from scratch on every view
/// refresh. Purely a display structure.
#[derive(Debug, Clone, Default)]
pub struct WeekGrid {
    cells: HashMap<(Weekday, SlotTime), Vec<Course>>,
}

impl WeekGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a course under a cell, appending after any occupants.
    pub(crate) fn register(&mut self, day: Weekday, time: SlotTime, course: Course) {
        self.cells.entry((day, time)).or_default().push(course);
    }

    /// Courses meeting at the given cell, in registration order.
    pub fn courses_at(&self, day: Weekday, time: SlotTime) -> &[Course] {
        self.cells
            .get(&(day, time))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether no cell holds a course.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in (day, time) order, for deterministic iteration.
    pub fn occupied_cells(&self) -> Vec<(Weekday, SlotTime)> {
        let mut cells: Vec<(Weekday, SlotTime)> = self.cells.keys().copied().collect();
        cells.sort();
        cells
    }
}
