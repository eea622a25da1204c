use super::table_status::TableStatus;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// A pool table as stored in the `tables` record.
///
/// `start_time` and `paused_elapsed` are monotonic milliseconds (see
/// `core::clock`); `created_at` is the only wall-clock field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    pub rate: i64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub start_time: Option<i64>, // running interval base, Running only
    #[serde(default)]
    pub paused_elapsed: i64, // carried over while Paused
    #[serde(default)]
    pub elapsed_time: i64, // finalized on stop
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub sessions: Vec<u64>, // ledger ids
}

/// Partial update applied by `table edit`.
#[derive(Debug, Clone, Default)]
pub struct TablePatch {
    pub name: Option<String>,
    pub rate: Option<i64>,
    pub notes: Option<String>,
}

impl Table {
    /// A fresh table in the `Stopped` state.
    pub fn new(id: String, name: String, rate: i64, notes: String) -> Self {
        Self {
            id,
            name,
            rate,
            notes,
            status: TableStatus::Stopped,
            start_time: None,
            paused_elapsed: 0,
            elapsed_time: 0,
            cost: 0,
            created_at: Local::now().to_rfc3339(),
            sessions: Vec::new(),
        }
    }

    pub fn apply_patch(&mut self, patch: &TablePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
    }
}

/// `[[id, table], ...]`: the shape tables take in the stored snapshot and
/// in the export document.
pub fn as_entries(tables: &[Table]) -> Vec<(String, Table)> {
    tables.iter().map(|t| (t.id.clone(), t.clone())).collect()
}

/// Inverse of [`as_entries`]. The table's own `id` wins over the key.
pub fn from_entries(entries: Vec<(String, Table)>) -> Vec<Table> {
    entries.into_iter().map(|(_, t)| t).collect()
}
