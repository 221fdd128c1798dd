use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

use touren_export::core::Processor;
use touren_export::models::{Config, FileInfo};
use touren_export::utils::collect_input_files;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if args.is_empty() {
        eprintln!("Aufruf: touren_export <datei.xlsx | ordner> ...");
        return Ok(());
    }

    let paths = collect_input_files(&args)?;
    if paths.is_empty() {
        tracing::warn!("Keine Excel-Dateien in den angegebenen Pfaden gefunden.");
        return Ok(());
    }

    let files: Vec<FileInfo> = paths.into_iter().map(FileInfo::from_path).collect();

    let processor = Processor::new(Config::default());
    let outcome = processor.process_files(&files);

    let stats = &outcome.stats;
    tracing::info!(
        "{} Dateien verarbeitet ({} fehlgeschlagen), {} Zeilen gelesen, {} Einträge in {:.2}s",
        stats.files_processed,
        stats.files_failed,
        stats.rows_scanned,
        stats.entries_extracted,
        stats.elapsed_secs
    );

    if outcome.entries.is_empty() {
        tracing::warn!("Keine gültigen Touren-Einträge in den verarbeiteten Dateien gefunden.");
        return Ok(());
    }

    let export = processor.export_json(&outcome.entries)?;
    fs::write(&export.file_name, &export.bytes)
        .with_context(|| format!("Export kann nicht geschrieben werden: {}", export.file_name))?;

    tracing::info!(
        "Export geschrieben: {} ({} Einträge, {})",
        export.file_name,
        outcome.entries.len(),
        export.content_type
    );

    Ok(())
}
