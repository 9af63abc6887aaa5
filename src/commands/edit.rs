use anyhow::Result;
use chrono::{NaiveDate, Utc};
use owo_colors::OwoColorize;
use schoolcal_core::app::CalendarApp;
use schoolcal_core::event::{EventDraft, parse_time};
use schoolcal_core::storage::Storage;

use crate::utils::dates::resolve_date;

/// Field overrides from the command line; `None` keeps the current value.
pub struct Changes {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub all_day: bool,
    pub description: Option<String>,
}

pub fn run<S: Storage>(
    app: &mut CalendarApp<S>,
    id: &str,
    changes: Changes,
    today: NaiveDate,
) -> Result<()> {
    let draft = app.open_edit(id)?;
    let draft = apply_changes(draft, changes, today)?;

    let id = app.submit(draft, Utc::now())?;

    if let Some(event) = app.store().get(&id) {
        println!("{}", format!("  Updated: {}", event).yellow());
    }

    Ok(())
}

fn apply_changes(mut draft: EventDraft, changes: Changes, today: NaiveDate) -> Result<EventDraft> {
    if let Some(title) = changes.title {
        draft.title = title;
    }

    if let Some(date) = changes.date {
        draft.date = resolve_date(Some(&date), today)?;
    }

    if changes.all_day {
        draft.time = None;
    } else if let Some(time) = changes.time {
        draft.time = Some(parse_time(time.trim())?);
    }

    if let Some(description) = changes.description {
        draft.description = Some(description);
    }

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn draft() -> EventDraft {
        EventDraft::new("Open House", NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
            .with_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
            .with_description("Main hall")
    }

    fn no_changes() -> Changes {
        Changes {
            title: None,
            date: None,
            time: None,
            all_day: false,
            description: None,
        }
    }

    #[test]
    fn no_changes_keeps_draft() {
        assert_eq!(apply_changes(draft(), no_changes(), today()).unwrap(), draft());
    }

    #[test]
    fn all_day_clears_time() {
        let changes = Changes {
            all_day: true,
            ..no_changes()
        };
        assert_eq!(apply_changes(draft(), changes, today()).unwrap().time, None);
    }

    #[test]
    fn overrides_date_and_time() {
        let changes = Changes {
            date: Some("2024-04-01".into()),
            time: Some("09:30".into()),
            ..no_changes()
        };
        let edited = apply_changes(draft(), changes, today()).unwrap();
        assert_eq!(edited.date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(edited.time, NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn bad_time_is_rejected() {
        let changes = Changes {
            time: Some("half past six".into()),
            ..no_changes()
        };
        assert!(apply_changes(draft(), changes, today()).is_err());
    }
}
