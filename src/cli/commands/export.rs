use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let format = format.unwrap_or(cfg.export_format);
        let path = expand_tilde(file);
        let pairs = store.export();

        ExportLogic::export(&pairs, format, &path, *force)?;

        ttlog_quiet(
            store.backend().conn(),
            "export",
            format.as_str(),
            &format!("{} pairs → {}", pairs.len(), path.display()),
        );
    }
    Ok(())
}
