use anyhow::{bail, Context, Result};
use std::time::Instant;

use super::{ExcelReader, LoadError, RowExtractor};
use crate::models::{Config, ExportFile, FileInfo, TourEntry, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};

pub struct Processor {
    config: Config,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Verarbeitet alle Dateien strikt nacheinander. Eine nicht lesbare
    /// Datei bricht nur die Verarbeitung dieser Datei ab; der Rest des
    /// Stapels läuft weiter und der Fehler wird im Ergebnis vermerkt.
    pub fn process_files(&self, files: &[FileInfo]) -> BatchOutcome {
        let start_time = Instant::now();
        let extractor = RowExtractor::new(&self.config);

        let mut entries = Vec::new();
        let mut failures = Vec::new();
        let mut rows_scanned = 0usize;

        for file_info in files {
            match self.process_file(file_info, &extractor) {
                Ok((file_entries, file_rows)) => {
                    tracing::debug!(
                        "{}: {} Einträge aus {} Zeilen",
                        file_info.file_name,
                        file_entries.len(),
                        file_rows
                    );
                    rows_scanned += file_rows;
                    entries.extend(file_entries);
                }
                Err(error) => {
                    tracing::warn!("Datei übersprungen: {}", error);
                    failures.push(FileFailure {
                        file_name: file_info.file_name.clone(),
                        error,
                    });
                }
            }
        }

        let stats = ProcessingStatistics {
            files_processed: files.len() - failures.len(),
            files_failed: failures.len(),
            rows_scanned,
            entries_extracted: entries.len(),
            elapsed_secs: start_time.elapsed().as_secs_f64(),
        };

        BatchOutcome {
            entries,
            failures,
            stats,
        }
    }

    fn process_file(
        &self,
        file_info: &FileInfo,
        extractor: &RowExtractor,
    ) -> std::result::Result<(Vec<TourEntry>, usize), LoadError> {
        let mut reader = ExcelReader::open(&file_info.file_path)?;
        let sheet = reader.read_sheet(&self.config.sheet_name, self.config.header_rows)?;

        let mut entries = Vec::new();
        for row in &sheet.rows {
            entries.extend(extractor.extract_row(row));
        }

        Ok((entries, sheet.row_count()))
    }

    /// Serialisiert die gesammelten Einträge als eingerücktes UTF-8-JSON;
    /// Umlaute und andere Nicht-ASCII-Zeichen bleiben unmaskiert.
    pub fn export_json(&self, entries: &[TourEntry]) -> Result<ExportFile> {
        if entries.is_empty() {
            bail!("Keine exportierbaren Einträge");
        }

        let bytes =
            serde_json::to_vec_pretty(entries).context("JSON-Serialisierung fehlgeschlagen")?;

        Ok(ExportFile {
            file_name: EXPORT_FILE_NAME.to_string(),
            content_type: EXPORT_CONTENT_TYPE.to_string(),
            bytes,
        })
    }
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub entries: Vec<TourEntry>,
    pub failures: Vec<FileFailure>,
    pub stats: ProcessingStatistics,
}

#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub error: LoadError,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessingStatistics {
    pub files_processed: usize,
    pub files_failed: usize,
    pub rows_scanned: usize,
    pub entries_extracted: usize,
    pub elapsed_secs: f64,
}
