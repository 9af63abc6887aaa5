//! iCalendar export.
//!
//! Writes RFC 5545 documents that calendar applications can import. Only the
//! subset the calendar needs is produced: one `VEVENT` per event with floating
//! (zone-less) start and end times.

mod generate;
mod text;

pub use generate::{PRODUCT_ID, UID_DOMAIN, generate_ics};
pub use text::escape_text;
