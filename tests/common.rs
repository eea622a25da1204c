#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with a private config dir and plain output.
pub fn cue() -> Command {
    let mut cmd = cargo_bin_cmd!("cuetimer");
    cmd.env("CUETIMER_HOME", env::temp_dir().join("cuetimer_test_home"))
        .env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_cuetimer.sqlite", name));
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

/// Fresh DB with the schema in place.
pub fn init_db(db_path: &str) {
    cue()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_table(db_path: &str, name: &str, rate: &str) {
    cue()
        .args(["--db", db_path, "table", "add", "--name", name, "--rate", rate])
        .assert()
        .success();
}

/// Tables as stored, via `table list --json`.
pub fn tables_json(db_path: &str) -> serde_json::Value {
    let out = cue()
        .args(["--db", db_path, "table", "list", "--json"])
        .output()
        .expect("run table list");
    serde_json::from_slice(&out.stdout).expect("table list --json output")
}

/// Start then stop a table with a short pause in between.
pub fn play_session(db_path: &str, name: &str) {
    cue().args(["--db", db_path, "start", name]).assert().success();
    std::thread::sleep(std::time::Duration::from_millis(30));
    cue().args(["--db", db_path, "stop", name]).assert().success();
}
