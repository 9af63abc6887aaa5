pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod month;

use chrono::NaiveDate;
use schoolcal_core::app::CalendarApp;
use schoolcal_core::config::CalendarConfig;
use schoolcal_core::storage::FileStorage;
use schoolcal_core::store::EventStore;

/// Open the persisted store and start on today's month.
pub fn open_app(config: &CalendarConfig, today: NaiveDate) -> CalendarApp<FileStorage> {
    let storage = FileStorage::new(config.data_path());
    let store = EventStore::open(storage, config.storage_key.clone());
    CalendarApp::new(store, today)
}
