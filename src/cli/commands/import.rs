use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::parse_bulk_text;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::now_millis;
use crate::utils::path::expand_tilde;
use crate::utils::plural;
use std::fs;
use std::io::{self, Read};

/// Bulk import of `english = zulu` lines.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let (text, source) = match file {
            Some(f) => (fs::read_to_string(expand_tilde(f))?, f.clone()),
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                (buf, "stdin".to_string())
            }
        };

        let lines = text.lines().filter(|l| !l.trim().is_empty()).count();
        let drafts = parse_bulk_text(&text);

        let mut store = open_store(cfg)?;
        let added = store.add_batch(&drafts, now_millis())?;
        let skipped = lines.saturating_sub(added);

        if added == 0 {
            info(format!(
                "No new pairs in {} ({} skipped).",
                source,
                plural(skipped, "line", "lines")
            ));
        } else {
            success(format!(
                "Imported {} from {} ({} skipped).",
                plural(added, "pair", "pairs"),
                source,
                plural(skipped, "line", "lines")
            ));
        }

        ttlog_quiet(
            store.backend().conn(),
            "import",
            &source,
            &format!("{added} added, {skipped} skipped"),
        );
    }

    Ok(())
}
