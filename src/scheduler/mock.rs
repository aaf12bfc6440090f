//! Mock schedule generator.
//!
//! Distributes selected courses across the week by position:
//! even-indexed courses meet Monday/Wednesday/Friday in a morning slot,
//! odd-indexed courses meet Tuesday/Thursday in an afternoon slot, and the
//! slot within each pool rotates with the index. The rule is a frozen
//! display contract, not a scheduling algorithm — cells may stack and
//! nothing is ever rejected.

use crate::models::{Course, SlotTime, WeekGrid, Weekday};

const MWF: [Weekday; 3] = [Weekday::Monday, Weekday::Wednesday, Weekday::Friday];
const TUTH: [Weekday; 2] = [Weekday::Tuesday, Weekday::Thursday];

const MORNING: [SlotTime; 3] = [
    SlotTime::on_hour(9),
    SlotTime::on_hour(10),
    SlotTime::on_hour(11),
];
const AFTERNOON: [SlotTime; 3] = [
    SlotTime::on_hour(13),
    SlotTime::on_hour(14),
    SlotTime::on_hour(15),
];

/// Builds the weekly grid for the given courses.
///
/// `selection` must be the selection set in its current insertion order —
/// the assignment depends on position, not on course code. Total over any
/// input; an empty selection yields an empty grid.
pub fn generate_mock_schedule<'a>(selection: impl IntoIterator<Item = &'a Course>) -> WeekGrid {
    let mut grid = WeekGrid::new();

    for (index, course) in selection.into_iter().enumerate() {
        let (days, pool): (&[Weekday], &[SlotTime; 3]) = if index % 2 == 0 {
            (&MWF, &MORNING)
        } else {
            (&TUTH, &AFTERNOON)
        };
        let time = pool[index % pool.len()];

        for &day in days {
            grid.register(day, time, course.clone());
        }
    }

    grid
}
