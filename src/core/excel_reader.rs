use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Datei kann nicht geöffnet werden: {path}")]
    Open {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },
    #[error("Arbeitsblatt '{sheet}' kann nicht gelesen werden: {path}")]
    Sheet {
        sheet: String,
        path: String,
        #[source]
        source: calamine::XlsxError,
    },
}

pub struct ExcelReader {
    path: String,
    workbook: Xlsx<std::io::BufReader<std::fs::File>>,
}

impl ExcelReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path_ref = path.as_ref();
        let file_path = path_ref.to_string_lossy().to_string();

        let workbook: Xlsx<_> = open_workbook(path_ref).map_err(|source| LoadError::Open {
            path: file_path.clone(),
            source,
        })?;

        Ok(Self {
            path: file_path,
            workbook,
        })
    }

    /// Liest genau das benannte Arbeitsblatt; die ersten `skip_rows`
    /// physischen Zeilen werden als Kopfblock übersprungen.
    pub fn read_sheet(&mut self, sheet_name: &str, skip_rows: usize) -> Result<SheetData, LoadError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|source| LoadError::Sheet {
                sheet: sheet_name.to_string(),
                path: self.path.clone(),
                source,
            })?;

        let rows = Self::range_to_rows(&range, skip_rows);

        Ok(SheetData { rows })
    }

    // Zellen absolut ab Spalte 0 auslesen, damit die konfigurierten
    // Spaltenindizes auch bei leeren Randspalten stimmen.
    fn range_to_rows(range: &Range<Data>, skip_rows: usize) -> Vec<Vec<Data>> {
        let mut rows = Vec::new();

        let Some(end) = range.end() else {
            return rows;
        };

        for row in (skip_rows as u32)..=end.0 {
            let mut row_data = Vec::new();
            for col in 0..=end.1 {
                let cell_value = range
                    .get_value((row, col))
                    .cloned()
                    .unwrap_or(Data::Empty);
                row_data.push(cell_value);
            }
            rows.push(row_data);
        }

        rows
    }
}

/// Zelleninhalt als Text; ganzzahlige Gleitkommawerte ohne Nachkommateil.
pub fn cell_to_string(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}

#[derive(Debug, Clone)]
pub struct SheetData {
    pub rows: Vec<Vec<Data>>,
}

impl SheetData {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
