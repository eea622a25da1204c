//! Loading and saving the application state through a `StateStore`.

use crate::core::app::AppState;
use crate::core::ledger::HistoryLedger;
use crate::db::store::StateStore;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::models::table::{Table, as_entries, from_entries};
use crate::ui::messages::warning;
use chrono::Local;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const TABLES_KEY: &str = "tables";
pub const SETTINGS_KEY: &str = "settings";
pub const HISTORY_KEY: &str = "history";

/// Stored shape of the table collection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TablesSnapshot {
    #[serde(default)]
    pub tables: Vec<(String, Table)>,
    #[serde(default)]
    pub timestamp: i64,
}

fn corrupt_key(key: &str) -> String {
    format!("{key}.corrupt")
}

/// Read one record. Missing → default; unreadable → default plus a warning
/// and an audit line, and the raw text is moved to `<key>.corrupt` so the
/// next load starts clean. Only store failures are errors.
fn load_record<T>(store: &mut dyn StateStore, key: &str) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.read(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(v) => Ok(v),
        Err(e) => {
            warning(format!("Stored '{key}' record is unreadable, starting empty: {e}"));
            if let Err(log_err) = store.audit("load_fallback", key, &e.to_string()) {
                warning(format!("Failed to write internal log: {log_err}"));
            }
            store.write(&corrupt_key(key), &raw)?;
            store.remove(key)?;
            Ok(T::default())
        }
    }
}

pub fn load_state(store: &mut dyn StateStore) -> AppResult<AppState> {
    let snapshot: TablesSnapshot = load_record(store, TABLES_KEY)?;
    let settings: Settings = load_record(store, SETTINGS_KEY)?;
    let history: HistoryLedger = load_record(store, HISTORY_KEY)?;

    Ok(AppState::new(
        from_entries(snapshot.tables),
        settings,
        history,
    ))
}

pub fn save_tables(store: &mut dyn StateStore, tables: &[Table]) -> AppResult<()> {
    let snapshot = TablesSnapshot {
        tables: as_entries(tables),
        timestamp: Local::now().timestamp_millis(),
    };
    store.write(TABLES_KEY, &serde_json::to_string(&snapshot)?)
}

pub fn save_settings(store: &mut dyn StateStore, settings: &Settings) -> AppResult<()> {
    store.write(SETTINGS_KEY, &serde_json::to_string(settings)?)
}

pub fn save_history(store: &mut dyn StateStore, history: &HistoryLedger) -> AppResult<()> {
    store.write(HISTORY_KEY, &serde_json::to_string(history)?)
}

/// Write all three records.
pub fn save_state(store: &mut dyn StateStore, state: &AppState) -> AppResult<()> {
    save_tables(store, &state.tables)?;
    save_settings(store, &state.settings)?;
    save_history(store, &state.history)?;
    Ok(())
}
