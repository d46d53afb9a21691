// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::pair::PairExport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array of `{english, zulu}`.
pub(crate) fn export_json(pairs: &[PairExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(pairs)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", pairs.len(), path);
    Ok(())
}

/// CSV with an `english,zulu` header (written by serde).
pub(crate) fn export_csv(pairs: &[PairExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    if pairs.is_empty() {
        wtr.write_record(["english", "zulu"])?;
    }
    for item in pairs {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", pairs.len(), path);
    Ok(())
}
