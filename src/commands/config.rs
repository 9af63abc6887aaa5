use anyhow::Result;
use owo_colors::OwoColorize;
use schoolcal_core::config::CalendarConfig;
use schoolcal_core::storage::FileStorage;

pub fn run(config: &CalendarConfig) -> Result<()> {
    let config_path = CalendarConfig::config_path()?;
    let storage = FileStorage::new(config.data_path());

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", storage.path_for(&config.storage_key).display());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
