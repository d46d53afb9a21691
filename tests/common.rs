#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn zb() -> Command {
    cargo_bin_cmd!("zulu-bloom")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zulu_bloom.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp input file and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input file");
    p
}

/// Initialize a fresh DB without touching the user's config file
pub fn init_db(db_path: &str) {
    zb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and import a small vocabulary
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    zb().args(["--db", db_path, "import"])
        .write_stdin("water = amanzi\nhello = sawubona\nthank you = ngiyabonga\n")
        .assert()
        .success();
}
