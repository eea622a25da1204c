use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_table, cue, init_db, play_session, setup_test_db, tables_json};

#[test]
fn test_start_pause_stop_records_history() {
    let db_path = setup_test_db("session_cycle");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");

    cue()
        .args(["--db", &db_path, "start", "T1"])
        .assert()
        .success()
        .stdout(contains("Started 'T1'"));
    assert_eq!(tables_json(&db_path)[0]["status"], "running");

    std::thread::sleep(std::time::Duration::from_millis(30));
    cue()
        .args(["--db", &db_path, "pause", "T1"])
        .assert()
        .success();

    let tables = tables_json(&db_path);
    assert_eq!(tables[0]["status"], "paused");
    assert!(tables[0]["pausedElapsed"].as_i64().unwrap() > 0);

    cue()
        .args(["--db", &db_path, "stop", "T1"])
        .assert()
        .success()
        .stdout(contains("Stopped 'T1'"));

    let tables = tables_json(&db_path);
    assert_eq!(tables[0]["status"], "stopped");
    assert_eq!(tables[0]["elapsedTime"], 0);
    assert_eq!(tables[0]["sessions"].as_array().unwrap().len(), 1);

    cue()
        .args(["--db", &db_path, "history", "list"])
        .assert()
        .success()
        .stdout(contains("T1").and(contains("1 session(s)")));
}

#[test]
fn test_repeated_transitions_are_no_ops() {
    let db_path = setup_test_db("session_noops");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");

    cue()
        .args(["--db", &db_path, "stop", "T1"])
        .assert()
        .success()
        .stdout(contains("already stopped"));
    cue()
        .args(["--db", &db_path, "pause", "T1"])
        .assert()
        .success()
        .stdout(contains("already stopped"));

    cue().args(["--db", &db_path, "start", "T1"]).assert().success();
    cue()
        .args(["--db", &db_path, "start", "T1"])
        .assert()
        .success()
        .stdout(contains("already running"));
}

#[test]
fn test_bulk_and_toggle() {
    let db_path = setup_test_db("session_bulk");
    init_db(&db_path);
    add_table(&db_path, "A", "30000");
    add_table(&db_path, "B", "30000");

    cue()
        .args(["--db", &db_path, "start", "--all"])
        .assert()
        .success()
        .stdout(contains("Started 2 table(s)"));

    cue()
        .args(["--db", &db_path, "toggle"])
        .assert()
        .success()
        .stdout(contains("Paused 2 table(s)"));

    cue()
        .args(["--db", &db_path, "toggle"])
        .assert()
        .success()
        .stdout(contains("Started 2 table(s)"));

    cue()
        .args(["--db", &db_path, "stop", "--all"])
        .assert()
        .success()
        .stdout(contains("Stopped 2 table(s)"));
}

#[test]
fn test_start_requires_id_or_all() {
    let db_path = setup_test_db("session_no_target");
    cue().args(["--db", &db_path, "start"]).assert().failure();
}

#[test]
fn test_shortcut_keys() {
    let db_path = setup_test_db("session_keys");
    init_db(&db_path);

    cue()
        .args(["--db", &db_path, "key", "n"])
        .assert()
        .success()
        .stdout(contains("Created Table 1"));

    cue()
        .args(["--db", &db_path, "key", " "])
        .assert()
        .success()
        .stdout(contains("Started 1 table(s)"));

    cue()
        .args(["--db", &db_path, "key", "t"])
        .assert()
        .success()
        .stdout(contains("Theme: dark"));

    cue()
        .args(["--db", &db_path, "key", "escape"])
        .assert()
        .success()
        .stdout(contains("Nothing to close"));

    cue()
        .args(["--db", &db_path, "key", "x"])
        .assert()
        .failure()
        .stderr(contains("Unknown shortcut key"));
}

#[test]
fn test_bill_leaves_table_running() {
    let db_path = setup_test_db("session_bill");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");
    play_session(&db_path, "T1");
    cue().args(["--db", &db_path, "start", "T1"]).assert().success();

    let out = cue()
        .args(["--db", &db_path, "bill", "T1", "--json"])
        .output()
        .unwrap();
    let bill: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(bill["tableName"], "T1");
    assert_eq!(bill["status"], "running");
    assert_eq!(bill["rate"], 30000);

    assert_eq!(tables_json(&db_path)[0]["status"], "running");
}
