use crate::cli::commands::session::Session;
use crate::cli::parser::{Commands, HistoryCmd};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::confirm;
use crate::models::history_entry::HistoryEntry;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::TextTable;
use crate::utils::{format_currency, format_duration};
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History { action } = cmd else {
        return Ok(());
    };

    let mut session = Session::open(cfg)?;

    match action {
        HistoryCmd::List { table } => {
            let entries: Vec<&HistoryEntry> = match table {
                Some(key) => match session.state.resolve(key) {
                    Some(id) => session.state.sessions_of(&id),
                    None => deleted_table_sessions(&session, key),
                },
                None => session.state.history.entries().iter().collect(),
            };

            if entries.is_empty() {
                warning("No sessions recorded.");
                return Ok(());
            }

            let currency = session.state.settings.currency;
            let money = |v: i64| format_currency(v, currency, cfg.usd_divisor);

            let mut out = TextTable::new(&["#", "TABLE", "START", "END", "DURATION", "COST"]);
            for e in &entries {
                out.add_row(vec![
                    e.id.to_string(),
                    e.table_name.clone(),
                    short_time(&e.start_time),
                    short_time(&e.end_time),
                    format_duration(e.duration),
                    money(e.cost),
                ]);
            }

            header(format!("{} session(s)", entries.len()));
            println!("{}", out.render());
            println!(
                "\nTotal: {}  {}",
                format_duration(entries.iter().map(|e| e.duration).sum()),
                money(entries.iter().map(|e| e.cost).sum())
            );
            Ok(())
        }

        HistoryCmd::Clear { yes } => {
            if session.state.history.is_empty() {
                info("History is already empty.");
                return Ok(());
            }

            if !*yes {
                print!(
                    "Delete {} recorded session(s)? [y/N]: ",
                    session.state.history.len()
                );
                io::stdout().flush().ok();
                if !confirm(io::stdin().lock())? {
                    info("History left untouched.");
                    return Ok(());
                }
            }

            let removed = session.state.clear_history();
            success(format!("Removed {removed} session(s) from history"));
            session.audit("history_clear", "", &format!("{removed} entries"));
            session.commit()
        }
    }
}

/// Ledger entries of a table that no longer exists, by its old id or name.
fn deleted_table_sessions<'a>(session: &'a Session, key: &str) -> Vec<&'a HistoryEntry> {
    let ledger = &session.state.history;
    let by_id: Vec<&HistoryEntry> = ledger.for_table(key).collect();
    if !by_id.is_empty() {
        return by_id;
    }
    let Some(id) = ledger
        .entries()
        .iter()
        .rev()
        .find(|e| e.table_name.eq_ignore_ascii_case(key))
        .map(|e| e.table_id.as_str())
    else {
        warning(format!("Table '{key}' not found."));
        return Vec::new();
    };
    ledger.for_table(id).collect()
}

/// `YYYY-MM-DD HH:MM` from an RFC 3339 stamp; anything else passes through.
fn short_time(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::short_time;

    #[test]
    fn short_time_trims_seconds_and_offset() {
        assert_eq!(short_time("2025-03-07T21:05:09+07:00"), "2025-03-07 21:05");
        assert_eq!(short_time("n/a"), "n/a");
    }
}

