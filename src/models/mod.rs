mod config;
mod entry;
mod export;
mod file_info;

pub use config::{ColumnLayout, Config, DriverColumns, DEFAULT_EXCLUSION_KEYWORDS};
pub use entry::{TourEntry, MISSING_TIME};
pub use export::{ExportFile, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
pub use file_info::FileInfo;
