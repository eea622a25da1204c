// src/export/logic.rs

use crate::core::app::AppState;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportDocument, HistoryRow};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// `billiards-history-YYYY-MM-DD.<ext>` for the given day.
    pub fn default_file_name(format: ExportFormat, now: DateTime<Local>) -> String {
        format!(
            "billiards-history-{}.{}",
            now.format("%Y-%m-%d"),
            format.as_str()
        )
    }

    /// Write the export and return the path written.
    ///
    /// - `json`: settings + history + tables snapshot
    /// - `csv`: history only (nothing written when empty)
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        now: DateTime<Local>,
    ) -> AppResult<Option<PathBuf>> {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(Self::default_file_name(format, now)),
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Json => {
                let doc = ExportDocument::build(state, now);
                export_json(&doc, &path)?;
            }
            ExportFormat::Csv => {
                if state.history.is_empty() {
                    warning("No history to export.");
                    return Ok(None);
                }
                let rows: Vec<HistoryRow> =
                    state.history.entries().iter().map(HistoryRow::from).collect();
                export_csv(&rows, &path)?;
            }
        }

        Ok(Some(path))
    }
}
