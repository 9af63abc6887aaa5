//! Core types for the school calendar.
//!
//! This crate holds everything that does not touch the terminal:
//! - `event` and `store` for the event model and its persisted collection
//! - `grid` and `agenda` for turning events into month and list views
//! - `export` and `ics` for JSON and iCalendar documents
//! - `app` for the explicit application state the front end drives

pub mod agenda;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod ics;
pub mod month;
pub mod storage;
pub mod store;

pub use error::{CalendarError, CalendarResult};
pub use event::{Event, EventDraft};
