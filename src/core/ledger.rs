//! Append-only ledger of billed sessions.

use crate::models::history_entry::{HistoryEntry, PendingEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Append and return the id given to the entry.
    pub fn record(&mut self, pending: PendingEntry) -> u64 {
        let id = self.next_id();
        self.entries.push(pending.into_entry(id));
        id
    }

    /// Empty the whole ledger. Irreversible.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn for_table<'a>(&'a self, table_id: &str) -> impl Iterator<Item = &'a HistoryEntry> {
        self.entries.iter().filter(move |e| e.table_id == table_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_cost(&self) -> i64 {
        self.entries.iter().map(|e| e.cost).sum()
    }

    pub fn total_duration(&self) -> i64 {
        self.entries.iter().map(|e| e.duration).sum()
    }

    // a cleared ledger starts over at 1
    fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}
