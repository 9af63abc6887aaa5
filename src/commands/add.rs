use anyhow::Result;
use chrono::{NaiveDate, Utc};
use owo_colors::OwoColorize;
use schoolcal_core::app::CalendarApp;
use schoolcal_core::event::EventDraft;
use schoolcal_core::storage::Storage;

use crate::utils::dates::resolve_date;

pub fn run<S: Storage>(
    app: &mut CalendarApp<S>,
    title: String,
    date: Option<String>,
    time: Option<String>,
    description: Option<String>,
    today: NaiveDate,
) -> Result<()> {
    let date = resolve_date(date.as_deref(), today)?;

    let draft = EventDraft::parse(
        &title,
        Some(&date.to_string()),
        time.as_deref(),
        description.as_deref(),
    )?;
    let id = app.submit(draft, Utc::now())?;

    if let Some(event) = app.store().get(&id) {
        let when = event.date.format("%a %b %-d, %Y").to_string();
        println!("{}", format!("  Created: {} ({})", event, when).green());
        println!("  {}", format!("id {}", id).dimmed());
    }

    Ok(())
}
