mod file_utils;

pub use file_utils::{collect_input_files, is_xlsx_file, scan_xlsx_files};
