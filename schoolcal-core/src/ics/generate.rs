//! ICS document generation.

use super::text::escape_text;
use crate::event::Event;
use chrono::NaiveDateTime;

pub const PRODUCT_ID: &str = "-//Tech Calendar//EN";

/// Appended to event ids to form globally unique UIDs
pub const UID_DOMAIN: &str = "techcalendar";

/// Generate a complete VCALENDAR for `events`, in collection order.
///
/// Times are floating: `DTSTART:20240315T180000`. All-day events start at
/// `T000000` and end at midnight of the following day.
pub fn generate_ics(events: &[Event]) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        "VERSION:2.0".into(),
        format!("PRODID:{}", PRODUCT_ID),
        "CALSCALE:GREGORIAN".into(),
        "METHOD:PUBLISH".into(),
    ];

    for event in events {
        push_event(&mut lines, event);
    }

    lines.push("END:VCALENDAR".into());

    let mut output = lines.join("\r\n");
    output.push_str("\r\n");
    output
}

fn push_event(lines: &mut Vec<String>, event: &Event) {
    lines.push("BEGIN:VEVENT".into());
    lines.push(format!("UID:{}@{}", event.id, UID_DOMAIN));
    lines.push(format!("DTSTART:{}", format_datetime(event.start())));
    lines.push(format!("DTEND:{}", format_datetime(event.end())));
    lines.push(format!("SUMMARY:{}", escape_text(&event.title)));

    if let Some(ref desc) = event.description {
        lines.push(format!("DESCRIPTION:{}", escape_text(desc)));
    }

    lines.push("END:VEVENT".into());
}

fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}
