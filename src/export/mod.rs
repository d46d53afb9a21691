// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{label} export completed: {} → {}",
        crate::utils::plural(count, "pair", "pairs"),
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
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
