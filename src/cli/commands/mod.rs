pub mod add;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod module;
pub mod review;
pub mod status;

use crate::config::Config;
use crate::core::seed::load_seed;
use crate::core::store::PairStore;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::pair::PairDraft;
use crate::ui::messages::warning;
use crate::utils::date::now_millis;
use crate::utils::path::expand_tilde;

/// Open the configured database and load the pair store, merging the seed
/// file when one is configured. A broken seed never stops the command.
pub(crate) fn open_store(cfg: &Config) -> AppResult<PairStore<SqliteKv>> {
    let kv = SqliteKv::open(&cfg.database)?;
    let seed = read_seed(cfg, &kv);
    PairStore::open(kv, &seed, now_millis())
}

fn read_seed(cfg: &Config, kv: &SqliteKv) -> Vec<PairDraft> {
    let Some(path) = &cfg.seed_file else {
        return Vec::new();
    };

    match load_seed(&expand_tilde(path)) {
        Ok(seed) => seed,
        Err(e) => {
            warning(format!("Unable to load default pairs from {}: {}", path, e));
            ttlog_quiet(kv.conn(), "seed", path, &e.to_string());
            Vec::new()
        }
    }
}
