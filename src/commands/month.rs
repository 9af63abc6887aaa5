use anyhow::Result;
use chrono::NaiveDate;
use schoolcal_core::app::CalendarApp;
use schoolcal_core::month::MonthCursor;
use schoolcal_core::storage::Storage;

use crate::render::Render;

pub fn run<S: Storage>(
    app: &mut CalendarApp<S>,
    month: Option<MonthCursor>,
    offset: i32,
    today: NaiveDate,
) -> Result<()> {
    if let Some(cursor) = month {
        app.show_month(cursor);
    }

    app.shift_months(offset)?;

    println!("{}", app.grid(today).render());

    Ok(())
}
