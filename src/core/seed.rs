use crate::errors::{AppError, AppResult};
use crate::models::pair::PairDraft;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a seed file: a JSON array of `{english, zulu}` records.
///
/// Entries whose sides are not both non-empty strings are dropped.
/// A missing file or a document that is not an array is an error; the
/// caller decides how loudly to degrade.
pub fn load_seed(path: &Path) -> AppResult<Vec<PairDraft>> {
    let content = fs::read_to_string(path)?;
    parse_seed(&content)
}

pub fn parse_seed(content: &str) -> AppResult<Vec<PairDraft>> {
    let data: Value = serde_json::from_str(content)?;
    let Value::Array(entries) = data else {
        return Err(AppError::Seed("seed pairs must be a JSON array".into()));
    };

    Ok(entries.iter().filter_map(seed_entry).collect())
}

fn seed_entry(v: &Value) -> Option<PairDraft> {
    let english = v.get("english")?.as_str()?;
    let zulu = v.get("zulu")?.as_str()?;
    PairDraft::new(english, zulu).sanitized()
}
