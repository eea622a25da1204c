use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_table, cue, init_db, play_session, setup_test_db, tables_json};

#[test]
fn test_settings_set_and_show() {
    let db_path = setup_test_db("settings_set_show");
    init_db(&db_path);

    cue()
        .args(["--db", &db_path, "settings", "set", "currency", "USD"])
        .assert()
        .success();
    cue()
        .args(["--db", &db_path, "settings", "set", "rounding", "15"])
        .assert()
        .success();
    cue()
        .args(["--db", &db_path, "settings", "toggle-language"])
        .assert()
        .success()
        .stdout(contains("language = en"));

    cue()
        .args(["--db", &db_path, "settings", "show"])
        .assert()
        .success()
        .stdout(contains("USD").and(contains("$4.35")))
        .stdout(contains("roundingMinutes : 15"));
}

#[test]
fn test_settings_rejects_unknown_key() {
    let db_path = setup_test_db("settings_unknown");
    init_db(&db_path);

    cue()
        .args(["--db", &db_path, "settings", "set", "volume", "11"])
        .assert()
        .failure()
        .stderr(contains("Unknown setting"));
}

#[test]
fn test_settings_rejects_non_finite_fee() {
    let db_path = setup_test_db("settings_nan_fee");
    init_db(&db_path);

    cue()
        .args(["--db", &db_path, "settings", "set", "currency", "USD"])
        .assert()
        .success();
    cue()
        .args(["--db", &db_path, "settings", "set", "serviceFee", "NaN"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for serviceFee"));

    cue()
        .args(["--db", &db_path, "settings", "show"])
        .assert()
        .success()
        .stdout(contains("USD").and(contains("unreadable").not()));
}

#[test]
fn test_history_clear_also_clears_table_references() {
    let db_path = setup_test_db("history_clear");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");
    play_session(&db_path, "T1");

    cue()
        .args(["--db", &db_path, "history", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("left untouched"));

    cue()
        .args(["--db", &db_path, "history", "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 1 session(s)"));

    assert!(tables_json(&db_path)[0]["sessions"].as_array().unwrap().is_empty());
    cue()
        .args(["--db", &db_path, "history", "list"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded"));
}
