//! Month grid computation.
//!
//! Produces the 7-column layout of a month: leading blanks up to the weekday
//! of the 1st, then one cell per day carrying that day's event labels. Nothing
//! here draws anything; front ends walk the cells.

use crate::event::Event;
use crate::month::MonthCursor;
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    pub title: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st of the month
    Blank,
    Day(DayCell),
}

/// Selecting the cell itself creates an event on `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<EventLabel>,
}

/// Selecting a label edits the event with `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLabel {
    pub id: String,
    pub title: String,
    pub tooltip: String,
}

impl From<&Event> for EventLabel {
    fn from(event: &Event) -> Self {
        EventLabel {
            id: event.id.clone(),
            title: event.title.clone(),
            tooltip: event.tooltip(),
        }
    }
}

/// Lay out `cursor`'s month, marking `today` and attaching events by date.
pub fn render_month(cursor: MonthCursor, events: &[Event], today: NaiveDate) -> MonthGrid {
    let leading = cursor.first_weekday() as usize;
    let days = cursor.days_in_month() as usize;

    let mut cells = Vec::with_capacity(leading + days);
    cells.extend(std::iter::repeat_n(GridCell::Blank, leading));

    let first = cursor.first_day();
    for offset in 0..days {
        let date = first + Duration::days(offset as i64);
        let labels = events
            .iter()
            .filter(|e| e.date == date)
            .map(EventLabel::from)
            .collect();

        cells.push(GridCell::Day(DayCell {
            date,
            is_today: date == today,
            events: labels,
        }));
    }

    MonthGrid {
        cursor,
        title: cursor.title(),
        cells,
    }
}

impl MonthGrid {
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, GridCell::Blank))
            .count()
    }

    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    pub fn event_label_count(&self) -> usize {
        self.days().map(|d| d.events.len()).sum()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|c| match c {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        })
    }

    pub fn day(&self, day_of_month: u32) -> Option<&DayCell> {
        self.days().nth(day_of_month.checked_sub(1)? as usize)
    }

    /// Rows of seven, the last one padded with blanks.
    pub fn weeks(&self) -> Vec<Vec<GridCell>> {
        self.cells
            .chunks(7)
            .map(|week| {
                let mut row = week.to_vec();
                row.resize(7, GridCell::Blank);
                row
            })
            .collect()
    }
}
