use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::pair::PairExport;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the pairs to `path` in `format`.
    ///
    /// An empty list still produces a file (an empty JSON array / a bare
    /// CSV header) so that the output can be fed back to `import`.
    pub fn export(
        pairs: &[PairExport],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if pairs.is_empty() {
            warning("No pairs stored; writing an empty export.");
        }

        match format {
            ExportFormat::Json => export_json(pairs, path),
            ExportFormat::Csv => export_csv(pairs, path),
        }
    }
}
