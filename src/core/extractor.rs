use calamine::{Data, DataType};
use chrono::{NaiveDate, NaiveDateTime};

use super::exclusion::ExclusionFilter;
use super::excel_reader::cell_to_string;
use crate::models::{ColumnLayout, Config, DriverColumns, TourEntry, MISSING_TIME};

// Datumsangaben kommen je nach Quellformatierung als Text; ISO- und
// deutsche Schreibweise werden akzeptiert.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d.%m.%y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d.%m.%Y %H:%M"];

const EMPTY_CELL: Data = Data::Empty;

pub struct RowExtractor {
    columns: ColumnLayout,
    filter: ExclusionFilter,
}

impl RowExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            columns: config.columns.clone(),
            filter: ExclusionFilter::new(&config.exclusion_keywords),
        }
    }

    /// Erzeugt pro Zeile 0 bis 2 Einträge, einen je belegtem und nicht
    /// ausgeschlossenem Fahrerfeld-Paar. Zeilen ohne gültiges Datum werden
    /// komplett übersprungen.
    pub fn extract_row(&self, row: &[Data]) -> Vec<TourEntry> {
        let Some(date) = parse_date(cell_at(row, self.columns.date)) else {
            return Vec::new();
        };

        let time = format_time(cell_at(row, self.columns.time));
        let task = cell_to_string(cell_at(row, self.columns.task))
            .trim()
            .to_string();

        let mut entries = Vec::new();

        for slot in &self.columns.driver_slots {
            if let Some(driver) = self.compose_driver(row, slot) {
                entries.push(TourEntry {
                    driver,
                    date,
                    time: time.clone(),
                    task: task.clone(),
                });
            }
        }

        entries
    }

    fn compose_driver(&self, row: &[Data], slot: &DriverColumns) -> Option<String> {
        let surname = name_part(cell_at(row, slot.surname));
        let given_name = name_part(cell_at(row, slot.given_name));

        if surname.is_empty() && given_name.is_empty() {
            return None;
        }

        let composed = format!("{}, {}", surname, given_name);
        let composed = composed.trim_matches([',', ' ']).to_string();

        if self.filter.is_excluded(&composed) {
            return None;
        }

        Some(composed)
    }
}

fn cell_at(row: &[Data], index: usize) -> &Data {
    row.get(index).unwrap_or(&EMPTY_CELL)
}

fn name_part(cell: &Data) -> String {
    title_case(cell_to_string(cell).trim())
}

/// Wortweise Großschreibung; Wortgrenze ist jedes nicht-alphabetische
/// Zeichen ("anna-lena" wird zu "Anna-Lena").
fn title_case(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut word_start = true;

    for c in raw.chars() {
        if c.is_alphabetic() {
            if word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            result.push(c);
            word_start = true;
        }
    }

    result
}

fn parse_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::Empty => None,
        Data::String(s) => parse_date_text(s.trim()),
        other => other.as_date(),
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }

    None
}

fn format_time(cell: &Data) -> String {
    match cell {
        Data::Empty => MISSING_TIME.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => cell
            .as_time()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| cell_to_string(cell).trim().to_string()),
        other => cell_to_string(other).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    fn create_extractor() -> RowExtractor {
        RowExtractor::new(&Config::default())
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    // Belegung entsprechend der Standard-Spaltenaufteilung: (3,4) und
    // (6,7) Fahrer, 8 Uhrzeit, 14 Datum, 15 Tour/Aufgabe.
    fn make_row(
        driver1: (&str, &str),
        driver2: (&str, &str),
        time: Data,
        date: Data,
        task: &str,
    ) -> Vec<Data> {
        let mut row = vec![Data::Empty; 16];
        if !driver1.0.is_empty() {
            row[3] = text(driver1.0);
        }
        if !driver1.1.is_empty() {
            row[4] = text(driver1.1);
        }
        if !driver2.0.is_empty() {
            row[6] = text(driver2.0);
        }
        if !driver2.1.is_empty() {
            row[7] = text(driver2.1);
        }
        row[8] = time;
        row[14] = date;
        if !task.is_empty() {
            row[15] = text(task);
        }
        row
    }

    fn excel_date(serial: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, false))
    }

    fn excel_time(hour: u32, minute: u32) -> Data {
        let serial = f64::from(hour * 60 + minute) / 1440.0;
        Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::TimeDelta, false))
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("müller"), "Müller");
        assert_eq!(title_case("DE VRIES"), "De Vries");
        assert_eq!(title_case("anna-lena"), "Anna-Lena");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_parse_date_text_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_date(&text("2024-03-05")), Some(expected));
        assert_eq!(parse_date(&text("05.03.2024")), Some(expected));
        assert_eq!(parse_date(&text("2024-03-05 06:00:00")), Some(expected));
        assert_eq!(parse_date(&text("kein Datum")), None);
        assert_eq!(parse_date(&text("")), None);
    }

    #[test]
    fn test_parse_date_typed_cells() {
        // 45356 = 2024-03-05 als Excel-Serientag
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_date(&excel_date(45356.0)), Some(expected));
        assert_eq!(parse_date(&Data::Float(45356.0)), Some(expected));
        assert_eq!(parse_date(&Data::Empty), None);
        assert_eq!(parse_date(&Data::Bool(true)), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&Data::Empty), "–");
        assert_eq!(format_time(&excel_time(7, 5)), "07:05");
        assert_eq!(format_time(&text("14:30 Uhr")), "14:30 Uhr");
        assert_eq!(format_time(&text("  offen  ")), "offen");
    }

    #[test]
    fn test_extract_row_single_driver() {
        let extractor = create_extractor();
        let row = make_row(
            ("müller", "anna"),
            ("", ""),
            excel_time(7, 5),
            text("2024-03-05"),
            "Tour 12",
        );

        let entries = extractor.extract_row(&row);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].driver, "Müller, Anna");
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(entries[0].time, "07:05");
        assert_eq!(entries[0].task, "Tour 12");
    }

    #[test]
    fn test_extract_row_both_drivers_in_slot_order() {
        let extractor = create_extractor();
        let row = make_row(
            ("müller", "anna"),
            ("schmidt", "jan"),
            Data::Empty,
            text("05.03.2024"),
            "Tour 3",
        );

        let entries = extractor.extract_row(&row);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].driver, "Müller, Anna");
        assert_eq!(entries[1].driver, "Schmidt, Jan");
        assert_eq!(entries[0].time, "–");
    }

    #[test]
    fn test_extract_row_without_date() {
        let extractor = create_extractor();
        let row = make_row(
            ("müller", "anna"),
            ("schmidt", "jan"),
            excel_time(7, 5),
            Data::Empty,
            "Tour 12",
        );

        assert!(extractor.extract_row(&row).is_empty());
    }

    #[test]
    fn test_extract_row_unparseable_date() {
        let extractor = create_extractor();
        let row = make_row(
            ("müller", "anna"),
            ("", ""),
            Data::Empty,
            text("morgen"),
            "",
        );

        assert!(extractor.extract_row(&row).is_empty());
    }

    #[test]
    fn test_extract_row_excluded_driver() {
        let extractor = create_extractor();
        let row = make_row(
            ("zippel", "hans"),
            ("schmidt", "jan"),
            Data::Empty,
            text("2024-03-05"),
            "Tour 7",
        );

        let entries = extractor.extract_row(&row);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].driver, "Schmidt, Jan");
    }

    #[test]
    fn test_extract_row_half_empty_name() {
        let extractor = create_extractor();
        let row = make_row(
            ("lehmann", ""),
            ("", "karin"),
            Data::Empty,
            text("2024-03-05"),
            "",
        );

        let entries = extractor.extract_row(&row);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].driver, "Lehmann");
        assert_eq!(entries[1].driver, "Karin");
        assert_eq!(entries[0].task, "");
    }

    #[test]
    fn test_extract_row_whitespace_names_skipped() {
        let extractor = create_extractor();
        let mut row = make_row(("", ""), ("", ""), Data::Empty, text("2024-03-05"), "Tour 1");
        row[3] = text("   ");
        row[4] = text(" ");

        assert!(extractor.extract_row(&row).is_empty());
    }

    #[test]
    fn test_extract_row_numeric_name_cell() {
        let extractor = create_extractor();
        let mut row = make_row(("", ""), ("", ""), Data::Empty, text("2024-03-05"), "");
        row[3] = Data::Float(17.0);

        let entries = extractor.extract_row(&row);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].driver, "17");
    }

    #[test]
    fn test_extract_short_row() {
        // Zeile endet vor den Datums-/Tourspalten
        let extractor = create_extractor();
        let row = vec![Data::Empty; 5];

        assert!(extractor.extract_row(&row).is_empty());
    }
}
