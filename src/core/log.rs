use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::colors_enabled;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create" | "start" => Colour::Green,
        "delete" | "history_clear" | "load_fallback" => Colour::Red,
        "update" | "settings" | "pause" => Colour::Yellow,
        "stop" | "reset" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `MAX_OP_WIDTH` visible characters.
fn op_label(row: &LogRow) -> (String, Option<String>) {
    let full = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let visible = if full.chars().count() > MAX_OP_WIDTH {
        let mut s: String = full.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    };

    match visible.split_once(' ') {
        Some((op, rest)) => (op.to_string(), Some(rest.to_string())),
        None => (visible, None),
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<(String, Option<String>)> = rows.iter().map(op_label).collect();
        let dates: Vec<String> = rows.iter().map(|r| display_date(&r.date)).collect();

        let op_w = labels
            .iter()
            .map(|(op, rest)| op.chars().count() + rest.as_ref().map_or(0, |r| r.chars().count() + 1))
            .max()
            .unwrap_or(10);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = dates.iter().map(|d| d.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for ((row, (op, rest)), date) in rows.iter().zip(labels).zip(dates) {
            let visible_len = op.chars().count() + rest.as_ref().map_or(0, |r| r.chars().count() + 1);

            let mut colored = if colors_enabled() {
                color_for_operation(&row.operation).paint(op).to_string()
            } else {
                op
            };
            if let Some(r) = rest {
                colored.push(' ');
                colored.push_str(&r);
            }
            let padding = " ".repeat(op_w.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id, date, colored, padding, row.message
            );
        }

        Ok(())
    }
}
