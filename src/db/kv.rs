//! SQLite-backed key-value store.

use crate::core::store::KeyValueStore;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    /// Open the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
