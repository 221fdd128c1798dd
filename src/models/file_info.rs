use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub file_path: PathBuf,
    pub file_name: String,
}

impl FileInfo {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            file_path: path,
            file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        let info = FileInfo::from_path(PathBuf::from("/daten/plan_kw10.xlsx"));
        assert_eq!(info.file_name, "plan_kw10.xlsx");
    }
}
