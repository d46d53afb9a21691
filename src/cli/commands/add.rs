use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::now_millis;

/// Add a single pair.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { front, back } = cmd {
        let mut store = open_store(cfg)?;

        if !store.add_pair(front, back, now_millis())? {
            warning("Nothing added: the pair is empty or already exists.");
            return Ok(());
        }

        // freshly added pairs go to the front of the list
        let pair = &store.pairs()[0];
        let label = format!("{} = {}", pair.front, pair.back);
        success(format!("Added pair: {}", label));
        ttlog_quiet(store.backend().conn(), "add", &pair.id.to_string(), &label);
    }

    Ok(())
}
