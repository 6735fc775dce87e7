//! Application layer - Use cases and orchestration

pub mod dashboard;
pub mod init;
pub mod list_entries;
pub mod load_journal;
pub mod manage_config;
pub mod record_entry;

pub use dashboard::{build_dashboard, Dashboard};
pub use list_entries::list_entries;
pub use load_journal::load_journal;
pub use manage_config::ConfigService;
pub use record_entry::RecordEntryService;
