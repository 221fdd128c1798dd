mod excel_reader;
mod extractor;
pub mod exclusion;
mod processor;

pub use excel_reader::{cell_to_string, ExcelReader, LoadError, SheetData};
pub use exclusion::ExclusionFilter;
pub use extractor::RowExtractor;
pub use processor::{BatchOutcome, FileFailure, ProcessingStatistics, Processor};
