//! Chronological event list.

use crate::event::Event;

pub const EMPTY_AGENDA_MESSAGE: &str = "No events scheduled. Add an event to get started.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agenda {
    Empty,
    Entries(Vec<AgendaEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    pub id: String,
    pub title: String,
    /// e.g. "Friday, March 15, 2024 at 18:00"
    pub when: String,
    pub description: Option<String>,
}

/// Events ordered by date then time, all-day events counting as midnight.
/// Ties keep collection order.
pub fn sorted_events(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.sort_key());
    sorted
}

pub fn render_agenda(events: &[Event]) -> Agenda {
    if events.is_empty() {
        return Agenda::Empty;
    }

    let entries = sorted_events(events)
        .into_iter()
        .map(|event| AgendaEntry {
            id: event.id.clone(),
            title: event.title.clone(),
            when: format_when(event),
            description: event.description.clone(),
        })
        .collect();

    Agenda::Entries(entries)
}

fn format_when(event: &Event) -> String {
    let date = event.date.format("%A, %B %-d, %Y").to_string();
    match event.time {
        Some(time) => format!("{} at {}", date, time.format("%H:%M")),
        None => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn event(id: &str, date: &str, time: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: time.map(|t| NaiveTime::parse_from_str(t, "%H:%M").unwrap()),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn sorts_by_date_then_time() {
        let events = vec![
            event("c", "2024-05-01", Some("09:00")),
            event("a", "2024-03-15", Some("18:00")),
            event("b", "2024-03-15", Some("19:30")),
            event("d", "2023-12-31", None),
        ];
        assert_eq!(ids(&sorted_events(&events)), ["d", "a", "b", "c"]);
    }

    #[test]
    fn all_day_sorts_before_timed_on_same_day() {
        let events = vec![
            event("timed", "2024-03-15", Some("08:00")),
            event("all-day", "2024-03-15", None),
        ];
        assert_eq!(ids(&sorted_events(&events)), ["all-day", "timed"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let events = vec![
            event("first", "2024-03-15", None),
            event("second", "2024-03-15", Some("00:00")),
            event("third", "2024-03-15", None),
        ];
        assert_eq!(ids(&sorted_events(&events)), ["first", "second", "third"]);
    }

    #[test]
    fn order_is_non_decreasing_for_every_permutation() {
        let base = vec![
            event("a", "2024-03-15", Some("18:00")),
            event("b", "2024-03-15", None),
            event("c", "2024-02-01", Some("07:45")),
            event("d", "2024-03-14", Some("23:59")),
        ];

        let mut perms = vec![vec![]];
        for e in &base {
            perms = perms
                .into_iter()
                .flat_map(|p: Vec<Event>| {
                    (0..=p.len()).map(move |i| {
                        let mut next = p.clone();
                        next.insert(i, e.clone());
                        next
                    })
                })
                .collect();
        }
        assert_eq!(perms.len(), 24);

        for perm in &perms {
            let sorted = sorted_events(perm);
            assert!(sorted.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key()));
            assert_eq!(ids(&sorted_events(perm)), ids(&sorted));
        }
    }

    #[test]
    fn empty_collection_renders_placeholder() {
        assert_eq!(render_agenda(&[]), Agenda::Empty);
    }

    #[test]
    fn entries_are_human_readable() {
        let mut timed = event("1", "2024-03-15", Some("18:00"));
        timed.description = Some("Main hall".to_string());
        let all_day = event("2", "2024-12-25", None);

        let Agenda::Entries(entries) = render_agenda(&[all_day, timed]) else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].when, "Friday, March 15, 2024 at 18:00");
        assert_eq!(entries[0].description.as_deref(), Some("Main hall"));
        assert_eq!(entries[1].when, "Wednesday, December 25, 2024");
    }
}
