use cuetimer::db::pool::DbPool;
use cuetimer::db::state::TABLES_KEY;
use cuetimer::db::store::StateStore;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_table, cue, init_db, setup_test_db};

#[test]
fn test_corrupt_tables_record_falls_back_to_empty() {
    let db_path = setup_test_db("storage_corrupt");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");

    {
        let mut pool = DbPool::new(&db_path).unwrap();
        pool.write(TABLES_KEY, "{broken").unwrap();
    }

    cue()
        .args(["--db", &db_path, "table", "list"])
        .assert()
        .success()
        .stdout(contains("unreadable").and(contains("No tables yet")));

    // the broken text is set aside, so the next load is quiet
    cue()
        .args(["--db", &db_path, "table", "list"])
        .assert()
        .success()
        .stdout(contains("unreadable").not());
    {
        let pool = DbPool::new(&db_path).unwrap();
        assert_eq!(pool.read("tables.corrupt").unwrap().as_deref(), Some("{broken"));
    }

    cue()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("load_fallback"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("storage_log");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");

    cue()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("create (T1)")))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("storage_db_info");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");

    cue()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed").and(contains("Tables:")));
}

#[test]
fn test_watch_once_renders_a_frame() {
    let db_path = setup_test_db("storage_watch_once");
    init_db(&db_path);
    add_table(&db_path, "T1", "30000");

    cue()
        .args(["--db", &db_path, "watch", "--once"])
        .assert()
        .success()
        .stdout(contains("T1").and(contains("00:00:00")));
}
