//! The persisted event collection.
//!
//! Every mutation rewrites the whole collection under a single storage key.
//! There are no partial writes: callers read everything, change it, and write
//! everything back.

use crate::error::{CalendarError, CalendarResult};
use crate::event::{Event, EventDraft};
use crate::storage::Storage;
use chrono::{DateTime, Utc};

/// Storage key the browser calendar used
pub const DEFAULT_STORAGE_KEY: &str = "tech_calendar_events";

pub struct EventStore<S: Storage> {
    storage: S,
    key: String,
    events: Vec<Event>,
}

impl<S: Storage> EventStore<S> {
    /// Open the store and load whatever is persisted under `key`.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = EventStore {
            storage,
            key: key.into(),
            events: Vec::new(),
        };
        store.events = store.load();
        store
    }

    /// Read the persisted collection.
    ///
    /// Unreadable or corrupt documents are logged and treated as empty. Records
    /// that don't fit the event shape are logged and skipped one by one, so a
    /// single bad record never hides the rest.
    pub fn load(&self) -> Vec<Event> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Error loading events");
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Error parsing stored events");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Event>(record) {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(key = %self.key, index, error = %e, "Skipping unreadable event");
                    None
                }
            })
            .collect()
    }

    /// Serialize the full collection and overwrite the persisted document.
    pub fn save_all(&mut self) -> CalendarResult<()> {
        let json = serde_json::to_string(&self.events)?;

        self.storage.set_item(&self.key, &json).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "Error saving events");
            CalendarError::Persist(e.to_string())
        })
    }

    /// Create or edit an event and persist the collection.
    ///
    /// Returns the id of the affected event. A draft whose id matches an
    /// existing event edits it in place; anything else is appended with a
    /// fresh id. On a persist failure the in-memory change is kept.
    pub fn upsert(&mut self, draft: EventDraft, now: DateTime<Utc>) -> CalendarResult<String> {
        draft.validate()?;

        let existing = draft
            .id
            .as_deref()
            .and_then(|id| self.events.iter().position(|e| e.id == id));

        let id = match existing {
            Some(index) => {
                let event = &mut self.events[index];
                event.apply(draft);
                tracing::debug!(id = %event.id, "Updated event");
                event.id.clone()
            }
            None => {
                let id = self.mint_id(now);
                self.events.push(Event::from_draft(draft, id.clone(), now));
                tracing::debug!(id = %id, "Created event");
                id
            }
        };

        self.save_all()?;
        Ok(id)
    }

    /// Delete an event and persist. Returns false (and writes nothing) if
    /// there was no event with that id.
    pub fn remove(&mut self, id: &str) -> CalendarResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);

        if self.events.len() == before {
            return Ok(false);
        }

        tracing::debug!(id = %id, "Deleted event");
        self.save_all()?;
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Ids are the creation time in milliseconds, bumped until unique.
    fn mint_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        while self.get(&millis.to_string()).is_some() {
            millis += 1;
        }
        millis.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_house() -> EventDraft {
        EventDraft::new("Open House", date(2024, 3, 15))
            .with_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
    }

    #[test]
    fn load_missing_document_is_empty() {
        let store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn load_corrupt_document_is_empty() {
        let storage = MemoryStorage::new().with_item(DEFAULT_STORAGE_KEY, "{not json");
        let store = EventStore::open(storage, DEFAULT_STORAGE_KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn load_skips_malformed_records() {
        let raw = r#"[
            {"id":"1","title":"Open House","date":"2024-03-15","time":"18:00",
             "description":null,"createdAt":"2024-03-01T09:00:00Z"},
            {"id":"2","title":"Bake Sale","date":"2024-03-16","time":"6pm",
             "description":null,"createdAt":"2024-03-01T09:00:00Z"},
            {"id":"3","title":"No Timestamp","date":"2024-03-17"},
            "not an event"
        ]"#;
        let storage = MemoryStorage::new().with_item(DEFAULT_STORAGE_KEY, raw);
        let store = EventStore::open(storage, DEFAULT_STORAGE_KEY);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").unwrap().title, "Open House");
    }

    #[test]
    fn mutation_after_partial_load_keeps_good_records() {
        let raw = r#"[
            {"id":"1","title":"Open House","date":"2024-03-15","time":"18:00",
             "description":null,"createdAt":"2024-03-01T09:00:00Z"},
            {"id":"2","title":"Bake Sale","date":"2024-03-16","time":"6pm",
             "description":null,"createdAt":"2024-03-01T09:00:00Z"}
        ]"#;
        let storage = MemoryStorage::new().with_item(DEFAULT_STORAGE_KEY, raw);
        let mut store = EventStore::open(storage, DEFAULT_STORAGE_KEY);

        store.upsert(EventDraft::new("Recital", date(2024, 4, 2)), now()).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].id, "1");
        assert_eq!(reloaded[1].title, "Recital");
    }

    #[test]
    fn create_assigns_time_derived_id() {
        let mut store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let id = store.upsert(open_house(), now()).unwrap();

        assert_eq!(id, now().timestamp_millis().to_string());
        let event = store.get(&id).unwrap();
        assert_eq!(event.created_at, now());
        assert_eq!(event.title, "Open House");
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let a = store.upsert(open_house(), now()).unwrap();
        let b = store.upsert(open_house(), now()).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn upsert_then_reload_round_trips() {
        let tmp = TempDir::new().unwrap();
        let mut store = EventStore::open(FileStorage::new(tmp.path()), DEFAULT_STORAGE_KEY);
        let draft = open_house().with_description("Bring; a friend,\nplease");
        let id = store.upsert(draft.clone(), now()).unwrap();

        let reopened = EventStore::open(FileStorage::new(tmp.path()), DEFAULT_STORAGE_KEY);
        let event = reopened.get(&id).unwrap();
        assert_eq!(event.title, draft.title);
        assert_eq!(event.date, draft.date);
        assert_eq!(event.time, draft.time);
        assert_eq!(event.description, draft.description);
    }

    #[test]
    fn edit_preserves_id_created_at_and_position() {
        let mut store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let first = store.upsert(open_house(), now()).unwrap();
        store
            .upsert(EventDraft::new("Recital", date(2024, 4, 2)), now())
            .unwrap();

        let mut edit = EventDraft::from(store.get(&first).unwrap());
        edit.title = "Spring Open House".to_string();
        edit.time = None;
        let later = now() + chrono::Duration::days(3);
        let edited = store.upsert(edit, later).unwrap();

        assert_eq!(edited, first);
        assert_eq!(store.len(), 2);
        let event = &store.events()[0];
        assert_eq!(event.id, first);
        assert_eq!(event.title, "Spring Open House");
        assert_eq!(event.time, None);
        assert_eq!(event.created_at, now());
    }

    #[test]
    fn upsert_with_unknown_id_appends() {
        let mut store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let mut draft = open_house();
        draft.id = Some("does-not-exist".to_string());
        let id = store.upsert(draft, now()).unwrap();
        assert_ne!(id, "does-not-exist");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn invalid_draft_mutates_nothing() {
        let mut store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let err = store
            .upsert(EventDraft::new("  ", date(2024, 3, 15)), now())
            .unwrap_err();
        assert!(matches!(err, CalendarError::Validation(_)));
        assert!(store.is_empty());
        assert_eq!(store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        store.upsert(open_house(), now()).unwrap();
        let before = store.events().to_vec();

        assert!(!store.remove("nope").unwrap());
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn remove_persists() {
        let mut store = EventStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let id = store.upsert(open_house(), now()).unwrap();
        assert!(store.remove(&id).unwrap());
        assert!(store.load().is_empty());
    }

    #[test]
    fn persist_failure_keeps_in_memory_state() {
        let mut store = EventStore::open(MemoryStorage::read_only(), DEFAULT_STORAGE_KEY);
        let err = store.upsert(open_house(), now()).unwrap_err();

        assert!(matches!(err, CalendarError::Persist(_)));
        assert_eq!(store.len(), 1);
        assert!(store.load().is_empty());
    }
}
