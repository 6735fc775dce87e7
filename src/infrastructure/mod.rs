//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod logging;
pub mod repository;
pub mod store;

pub use config::Config;
pub use logging::init_logging;
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{CsvJournalStore, JournalStore};
