use crate::core::app::AppState;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::format_duration;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str, state: &AppState) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORDS
    //
    let records: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))?;
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    println!("{}• Stored records:{} {}{}{}", CYAN, RESET, GREEN, records, RESET);
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    //
    // 3) CONTENT
    //
    println!("{}• Tables:{} {}", CYAN, RESET, state.tables.len());
    println!(
        "{}• History entries:{} {}",
        CYAN,
        RESET,
        state.history.len()
    );
    println!(
        "{}• Billed total:{} {} over {}",
        CYAN,
        RESET,
        state.history.total_cost(),
        format_duration(state.history.total_duration())
    );

    //
    // 4) LAST WRITE
    //
    let last_write: Option<String> = pool
        .conn
        .query_row(
            "SELECT updated_at FROM kv ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!(
        "{}• Last write:{} {}",
        CYAN,
        RESET,
        last_write.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
