// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub(crate) use fs_utils::confirm;
pub use logic::ExportLogic;
pub use model::{ExportDocument, HistoryRow};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full document: settings, history and tables
    Json,
    /// History ledger only, one row per session
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
