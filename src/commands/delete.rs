use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use schoolcal_core::app::CalendarApp;
use schoolcal_core::storage::Storage;

pub fn run<S: Storage>(app: &mut CalendarApp<S>, id: &str, yes: bool) -> Result<()> {
    let Some(event) = app.store().get(id) else {
        anyhow::bail!("Event not found: {}", id);
    };
    let title = event.title.clone();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Are you sure you want to delete \"{}\"?", title))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "  Nothing deleted".dimmed());
            return Ok(());
        }
    }

    app.delete(id)?;
    println!("{}", format!("  Deleted: {}", title).red());

    Ok(())
}
