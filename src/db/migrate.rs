use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Applied migrations are recorded
/// there, so it has to come first.
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
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
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Key-value store holding the `tables`, `settings` and `history` records.
fn migrate_create_kv(conn: &Connection) -> Result<()> {
    let version = "20250901_0001_create_kv";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created kv table")?;
    success(format!("Migration applied: {} → created 'kv' table", version));
    Ok(())
}

/// Older databases created `kv` without `updated_at`.
fn migrate_kv_updated_at(conn: &Connection) -> Result<()> {
    let version = "20251012_0002_kv_updated_at";
    if is_applied(conn, version)? {
        return Ok(());
    }

    let mut stmt = conn.prepare("PRAGMA table_info('kv')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    let mut has_column = false;
    for c in cols {
        if c? == "updated_at" {
            has_column = true;
        }
    }

    if !has_column {
        conn.execute_batch(
            "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        )?;
        success(format!(
            "Migration applied: {} → added 'updated_at' to kv table",
            version
        ));
    }

    mark_applied(conn, version, "kv.updated_at present")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_kv(conn)?;
    migrate_kv_updated_at(conn)?;
    Ok(())
}

/// Whether the schema is complete (used by `db --check`).
pub fn schema_ready(conn: &Connection) -> Result<bool> {
    Ok(table_exists(conn, "log")? && table_exists(conn, "kv")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert!(schema_ready(&conn).unwrap());
        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, 2);
    }

    #[test]
    fn legacy_kv_gets_updated_at() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_log_table(&conn).unwrap();
        conn.execute_batch("CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        mark_applied(&conn, "20250901_0001_create_kv", "legacy").unwrap();

        run_pending_migrations(&conn).unwrap();
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('a', 'b', 'now')",
            [],
        )
        .unwrap();
    }
}
