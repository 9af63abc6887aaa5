//! Export documents and their file names.

use crate::error::CalendarResult;
use crate::event::Event;
use chrono::NaiveDate;
use std::fmt;

pub const DEFAULT_EXPORT_PREFIX: &str = "tech-calendar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Ics,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Ics => "ics",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Ics => "text/calendar",
        }
    }

    /// Render `events` in this format.
    pub fn render(&self, events: &[Event]) -> CalendarResult<String> {
        match self {
            ExportFormat::Json => export_json(events),
            ExportFormat::Ics => Ok(crate::ics::generate_ics(events)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// `<prefix>-<YYYY-MM-DD>.<ext>`
pub fn export_filename(prefix: &str, today: NaiveDate, format: ExportFormat) -> String {
    format!("{}-{}.{}", prefix, today.format("%Y-%m-%d"), format.extension())
}

/// Pretty-printed array of events, same records as the persisted store.
pub fn export_json(events: &[Event]) -> CalendarResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}
