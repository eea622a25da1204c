// src/export/model.rs

use crate::core::app::AppState;
use crate::models::history_entry::HistoryEntry;
use crate::models::settings::Settings;
use crate::models::table::{Table, as_entries};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The downloadable document: everything needed to audit the hall.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportDocument {
    pub exported: String,
    pub settings: Settings,
    pub history: Vec<HistoryEntry>,
    pub tables: Vec<(String, Table)>,
}

impl ExportDocument {
    pub fn build(state: &AppState, exported: DateTime<Local>) -> Self {
        Self {
            exported: exported.to_rfc3339(),
            settings: state.settings.clone(),
            history: state.history.entries().to_vec(),
            tables: as_entries(&state.tables),
        }
    }
}

/// Flat ledger row for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct HistoryRow {
    pub id: u64,
    pub table_id: String,
    pub table_name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_ms: i64,
    pub rate: i64,
    pub cost: i64,
    pub notes: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(e: &HistoryEntry) -> Self {
        Self {
            id: e.id,
            table_id: e.table_id.clone(),
            table_name: e.table_name.clone(),
            start_time: e.start_time.clone(),
            end_time: e.end_time.clone(),
            duration_ms: e.duration,
            rate: e.rate,
            cost: e.cost,
            notes: e.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::{Clock, ManualClock};

    #[test]
    fn document_has_the_four_sections() {
        let clock = ManualClock::new(0);
        let mut state = AppState::default();
        let id = state.create_table(None, 30_000, None, &clock).id.clone();
        state.start_table(&id, &clock);
        clock.advance(60_000);
        state.stop_table(&id, &clock);

        let doc = ExportDocument::build(&state, clock.wall_now());
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json["exported"].is_string());
        assert_eq!(json["settings"]["roundingMinutes"], 1);
        assert_eq!(json["history"][0]["duration"], 60_000);
        assert_eq!(json["tables"][0][0], id.as_str());

        let back: ExportDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
