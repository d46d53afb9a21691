use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn kv_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('kv')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Key-value table holding the serialized pair list and streak.
fn create_kv_table(conn: &Connection) -> Result<()> {
    let version = "20250601_0001_create_kv";
    if table_exists(conn, "kv")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    mark_applied(conn, version, "Created kv table")?;
    success("Created kv table.");
    Ok(())
}

/// Track when each key was last written.
fn add_updated_at_to_kv(conn: &Connection) -> Result<()> {
    let version = "20250712_0002_kv_updated_at";
    if migration_applied(conn, version)? || kv_has_column(conn, "updated_at")? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;
    mark_applied(conn, version, "Added updated_at to kv")?;
    success(format!("Migration applied: {version} → added 'updated_at' to kv table"));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_kv_table(conn)?;
    add_updated_at_to_kv(conn)?;
    Ok(())
}
