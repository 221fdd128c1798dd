use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Platzhalter für eine fehlende Uhrzeit im Export.
pub const MISSING_TIME: &str = "–";

/// Ein normalisierter Dienstplan-Eintrag; die Feldnamen im JSON sind
/// externer Vertrag der Exportdatei.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourEntry {
    #[serde(rename = "Fahrer")]
    pub driver: String,
    #[serde(rename = "Datum")]
    pub date: NaiveDate,
    #[serde(rename = "Uhrzeit")]
    pub time: String,
    #[serde(rename = "Tour/Aufgabe")]
    pub task: String,
}
