use serde::{Deserialize, Serialize};

/// Namen, die keinen Export-Eintrag erzeugen sollen (Teilstring-Abgleich).
pub const DEFAULT_EXCLUSION_KEYWORDS: [&str; 7] = [
    "zippel",
    "insel",
    "paasch",
    "meyer",
    "ihde",
    "devies",
    "insellogistik",
];

/// Spaltenpaar (Nachname, Vorname) eines Fahrerfelds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverColumns {
    pub surname: usize,
    pub given_name: usize,
}

/// Feste Spaltenbelegung des Blatts, 0-indiziert. Layoutänderungen der
/// Tabelle brauchen nur diese Zuordnung, keine Logikänderung.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub driver_slots: Vec<DriverColumns>,
    pub time: usize,
    pub date: usize,
    pub task: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            driver_slots: vec![
                DriverColumns {
                    surname: 3,
                    given_name: 4,
                },
                DriverColumns {
                    surname: 6,
                    given_name: 7,
                },
            ],
            time: 8,
            date: 14,
            task: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sheet_name: String,
    pub header_rows: usize,
    pub columns: ColumnLayout,
    pub exclusion_keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: "Touren".to_string(),
            header_rows: 4,
            columns: ColumnLayout::default(),
            exclusion_keywords: DEFAULT_EXCLUSION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}
