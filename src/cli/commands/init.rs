use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing zulu-bloom…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_str);

    let kv = SqliteKv::open(&db_str)?;

    println!("✅ Database initialized at {}", &db_str);

    ttlog_quiet(
        kv.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_str),
    );

    println!("🎉 zulu-bloom initialization completed!");
    Ok(())
}
