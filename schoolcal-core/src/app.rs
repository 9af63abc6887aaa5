//! Application state: the store, the month on display, and the open form.
//!
//! Front ends hold one `CalendarApp`, feed it user actions, and re-render from
//! `grid()` and `agenda()` afterwards.

use crate::agenda::{Agenda, render_agenda};
use crate::error::{CalendarError, CalendarResult};
use crate::event::EventDraft;
use crate::grid::{MonthGrid, render_month};
use crate::month::MonthCursor;
use crate::storage::Storage;
use crate::store::EventStore;
use chrono::{DateTime, NaiveDate, Utc};

pub struct CalendarApp<S: Storage> {
    store: EventStore<S>,
    cursor: MonthCursor,
    /// Id of the event whose edit form is open
    editing: Option<String>,
}

impl<S: Storage> CalendarApp<S> {
    pub fn new(store: EventStore<S>, today: NaiveDate) -> Self {
        CalendarApp {
            store,
            cursor: MonthCursor::containing(today),
            editing: None,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn show_month(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
    }

    /// Move the displayed month. The cursor is unchanged if the target month
    /// is out of range.
    pub fn shift_months(&mut self, months: i32) -> CalendarResult<()> {
        self.cursor = self.cursor.offset(months)?;
        Ok(())
    }

    pub fn next_month(&mut self) -> CalendarResult<()> {
        self.shift_months(1)
    }

    pub fn prev_month(&mut self) -> CalendarResult<()> {
        self.shift_months(-1)
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.cursor = MonthCursor::containing(today);
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Open a blank create form for `date`.
    pub fn open_create(&mut self, date: NaiveDate) -> EventDraft {
        self.editing = None;
        EventDraft::new("", date)
    }

    /// Open the edit form for an existing event.
    pub fn open_edit(&mut self, id: &str) -> CalendarResult<EventDraft> {
        let event = self
            .store
            .get(id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))?;

        self.editing = Some(event.id.clone());
        Ok(EventDraft::from(event))
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Submit the open form. Edits when an edit form is open, creates otherwise.
    ///
    /// The form stays open on validation errors. A persist failure still
    /// closes it since the change is applied in memory.
    pub fn submit(&mut self, mut draft: EventDraft, now: DateTime<Utc>) -> CalendarResult<String> {
        draft.id = self.editing.clone();

        match self.store.upsert(draft, now) {
            Err(e @ CalendarError::Validation(_)) => Err(e),
            result => {
                self.editing = None;
                result
            }
        }
    }

    /// Delete an event. The caller is responsible for confirming first.
    pub fn delete(&mut self, id: &str) -> CalendarResult<bool> {
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        self.store.remove(id)
    }

    pub fn grid(&self, today: NaiveDate) -> MonthGrid {
        render_month(self.cursor, self.store.events(), today)
    }

    pub fn agenda(&self) -> Agenda {
        render_agenda(self.store.events())
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }
}
