//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Review / session
    // ---------------------------
    #[error("Invalid quality rating: {0} (expected 0-5)")]
    InvalidQuality(i64),

    #[error("Invalid session state: cannot {action} while {state}")]
    InvalidSessionState {
        action: &'static str,
        state: &'static str,
    },

    #[error("Unknown pair id: {0}")]
    UnknownPair(String),

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    // ---------------------------
    // Seed source
    // ---------------------------
    #[error("Seed source error: {0}")]
    Seed(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
