//! Calendar event types.
//!
//! An `Event` is what gets persisted and rendered. An `EventDraft` is what the
//! user submits from the add/edit form; the store turns drafts into events.
//!
//! The JSON shape matches the documents the browser calendar kept in local
//! storage, so existing backups load unchanged:
//!
//! ```json
//! { "id": "1710525600000", "title": "Open House", "date": "2024-03-15",
//!   "time": "18:00", "description": null, "createdAt": "2024-03-01T09:00:00Z" }
//! ```

use crate::error::{CalendarError, CalendarResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// A user-created calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Clock time; `None` means an all-day event
    #[serde(default, with = "hhmm")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub(crate) fn from_draft(draft: EventDraft, id: String, created_at: DateTime<Utc>) -> Self {
        Event {
            id,
            title: draft.title.trim().to_string(),
            date: draft.date,
            time: draft.time,
            description: clean_text(draft.description),
            created_at,
        }
    }

    /// Overwrite the user-editable fields, keeping `id` and `created_at`.
    pub(crate) fn apply(&mut self, draft: EventDraft) {
        self.title = draft.title.trim().to_string();
        self.date = draft.date;
        self.time = draft.time;
        self.description = clean_text(draft.description);
    }

    pub fn is_all_day(&self) -> bool {
        self.time.is_none()
    }

    /// Ordering key for list views. All-day events count as midnight.
    pub fn sort_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time.unwrap_or(NaiveTime::MIN))
    }

    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Timed events last one hour; all-day events end at midnight of the next day.
    pub fn end(&self) -> NaiveDateTime {
        match self.time {
            Some(_) => self.start() + Duration::hours(1),
            None => (self.date + Duration::days(1)).and_time(NaiveTime::MIN),
        }
    }

    /// Hover text for a grid label, e.g. "Open House at 18:00"
    pub fn tooltip(&self) -> String {
        match self.time {
            Some(time) => format!("{} at {}", self.title, time.format("%H:%M")),
            None => self.title.clone(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The contents of the add/edit form.
///
/// `id` is set when editing an existing event and `None` when creating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Option<String>,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        EventDraft {
            id: None,
            title: title.into().trim().to_string(),
            date,
            time: None,
            description: None,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = clean_text(Some(description.into()));
        self
    }

    /// Build a draft from raw form fields.
    ///
    /// `date` must be `YYYY-MM-DD` and `time`, when non-blank, `HH:MM`.
    pub fn parse(
        title: &str,
        date: Option<&str>,
        time: Option<&str>,
        description: Option<&str>,
    ) -> CalendarResult<Self> {
        let date = match date.map(str::trim) {
            Some(d) if !d.is_empty() => parse_date(d)?,
            _ => return Err(CalendarError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        };

        let time = match time.map(str::trim) {
            Some(t) if !t.is_empty() => Some(parse_time(t)?),
            _ => None,
        };

        let draft = EventDraft {
            id: None,
            title: title.trim().to_string(),
            date,
            time,
            description: clean_text(description.map(str::to_string)),
        };
        draft.validate()?;

        Ok(draft)
    }

    pub fn validate(&self) -> CalendarResult<()> {
        if self.title.trim().is_empty() {
            return Err(CalendarError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        }
        Ok(())
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        EventDraft {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            date: event.date,
            time: event.time,
            description: event.description.clone(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        CalendarError::Validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}

/// Parse an `HH:MM` (or `HH:MM:SS`) clock time
pub fn parse_time(s: &str) -> CalendarResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| CalendarError::Validation(format!("Invalid time '{}'. Expected HH:MM", s)))
}

fn clean_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Serde adapter storing `Option<NaiveTime>` as `"HH:MM"` or `null`.
///
/// Times read with non-zero seconds are written back as `"HH:MM:SS"`.
mod hhmm {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) if t.second() == 0 => s.serialize_str(&t.format("%H:%M").to_string()),
            Some(t) => s.serialize_str(&t.format("%H:%M:%S").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_time(s)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
