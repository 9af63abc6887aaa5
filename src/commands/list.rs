use anyhow::Result;
use schoolcal_core::app::CalendarApp;
use schoolcal_core::export::export_json;
use schoolcal_core::storage::Storage;

use crate::render::Render;

pub fn run<S: Storage>(app: &CalendarApp<S>, json: bool) -> Result<()> {
    if json {
        println!("{}", export_json(app.store().events())?);
    } else {
        println!("{}", app.agenda().render());
    }

    Ok(())
}
