//! Terminal rendering for calendar views.
//!
//! Extension traits that turn the core crate's grid and agenda models into
//! colored text using owo_colors.

use chrono::Datelike;
use owo_colors::OwoColorize;
use schoolcal_core::agenda::{Agenda, EMPTY_AGENDA_MESSAGE};
use schoolcal_core::grid::{GridCell, MonthGrid};
use schoolcal_core::month::DAY_HEADERS;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Each grid column is this many characters wide
const CELL_WIDTH: usize = 5;

impl Render for MonthGrid {
    fn render(&self) -> String {
        let width = CELL_WIDTH * 7;
        let mut lines = Vec::new();

        lines.push(format!("{:^width$}", self.title).bold().to_string());
        lines.push(
            DAY_HEADERS
                .iter()
                .map(|d| format!("{:>4} ", d))
                .collect::<String>()
                .dimmed()
                .to_string(),
        );

        for week in self.weeks() {
            let row: String = week.iter().map(render_cell).collect();
            lines.push(row.trim_end().to_string());
        }

        let labelled: Vec<_> = self.days().filter(|d| !d.events.is_empty()).collect();
        if !labelled.is_empty() {
            lines.push(String::new());
        }
        for day in labelled {
            for label in &day.events {
                lines.push(format!(
                    "  {:>2}  {} {}",
                    day.date.day(),
                    label.tooltip,
                    format!("[{}]", label.id).dimmed()
                ));
            }
        }

        lines.join("\n")
    }
}

/// A day number, followed by `*` when the day has events
fn render_cell(cell: &GridCell) -> String {
    match cell {
        GridCell::Blank => " ".repeat(CELL_WIDTH),
        GridCell::Day(day) => {
            let number = format!("{:>3}", day.date.day());
            let number = if day.is_today {
                number.reversed().to_string()
            } else {
                number
            };
            let marker = if day.events.is_empty() {
                " ".to_string()
            } else {
                "*".yellow().to_string()
            };
            format!("{}{} ", number, marker)
        }
    }
}

impl Render for Agenda {
    fn render(&self) -> String {
        let entries = match self {
            Agenda::Empty => return EMPTY_AGENDA_MESSAGE.dimmed().to_string(),
            Agenda::Entries(entries) => entries,
        };

        let mut lines = Vec::new();
        for entry in entries {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(entry.title.bold().to_string());
            lines.push(format!("  {}", entry.when));
            if let Some(ref desc) = entry.description {
                lines.push(format!("  {}", desc));
            }
            lines.push(format!("  {}", format!("id {}", entry.id).dimmed()));
        }

        lines.join("\n")
    }
}
