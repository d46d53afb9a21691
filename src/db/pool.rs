//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, creating its directory if needed.
    pub fn new(path: &str) -> Result<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            // failures surface from Connection::open below
            fs::create_dir_all(parent).ok();
        }
        let conn = Connection::open(p)?;
        Ok(Self { conn })
    }
}
