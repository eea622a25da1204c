use serde::{Deserialize, Serialize};

/// One billed session in the history ledger. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    pub table_id: String,
    pub table_name: String,
    pub start_time: String, // RFC 3339, wall clock
    pub end_time: String,   // RFC 3339, wall clock
    pub duration: i64,      // ms
    pub rate: i64,
    pub cost: i64,
    #[serde(default)]
    pub notes: String,
}

/// A stop result waiting to be appended to the ledger (no id yet).
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEntry {
    pub table_id: String,
    pub table_name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: i64,
    pub rate: i64,
    pub cost: i64,
    pub notes: String,
}

impl PendingEntry {
    pub fn into_entry(self, id: u64) -> HistoryEntry {
        HistoryEntry {
            id,
            table_id: self.table_id,
            table_name: self.table_name,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            rate: self.rate,
            cost: self.cost,
            notes: self.notes,
        }
    }
}
