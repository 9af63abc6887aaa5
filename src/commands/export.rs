use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use schoolcal_core::app::CalendarApp;
use schoolcal_core::config::CalendarConfig;
use schoolcal_core::export::{ExportFormat, export_filename};
use schoolcal_core::storage::Storage;

pub fn run<S: Storage>(
    app: &CalendarApp<S>,
    config: &CalendarConfig,
    format: ExportFormat,
    output: Option<PathBuf>,
    today: NaiveDate,
) -> Result<()> {
    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let events = app.store().events();
    let content = format.render(events)?;
    let path = dir.join(export_filename(&config.export_prefix, today, format));

    std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format!("  Exported {} events to {}", events.len(), path.display()).green()
    );
    println!("  {}", format.mime_type().dimmed());

    Ok(())
}
