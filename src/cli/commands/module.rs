use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::modules::module_pairs;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::now_millis;
use crate::utils::plural;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Module { name } = cmd {
        let (drafts, label) = module_pairs(name)?;

        let mut store = open_store(cfg)?;
        let added = store.add_batch(&drafts, now_millis())?;

        if added == 0 {
            info(format!(
                "Module '{}' already loaded. No new pairs were added.",
                name
            ));
        } else {
            success(format!(
                "Added {}.",
                plural(
                    added,
                    &format!("{label} pair"),
                    &format!("{label} pairs")
                )
            ));
        }

        ttlog_quiet(
            store.backend().conn(),
            "module",
            name,
            &format!("{added} added"),
        );
    }

    Ok(())
}
