pub const EXPORT_FILE_NAME: &str = "touren_export.json";
pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// Fertiges Exportdokument für eine Ausgabesenke (Download, Dateisystem).
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
