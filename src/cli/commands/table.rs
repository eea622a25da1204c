use crate::cli::commands::session::Session;
use crate::cli::parser::{Commands, TableCmd};
use crate::config::Config;
use crate::core::app::{AppState, Outcome};
use crate::core::clock::{Clock, SystemClock};
use crate::core::ticker::{Frame, Ticker};
use crate::errors::AppResult;
use crate::models::table::TablePatch;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{colorize_amount, colorize_status};
use crate::utils::table::TextTable;
use crate::utils::{format_currency, format_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Table { action } = cmd else {
        return Ok(());
    };

    let clock = SystemClock::new();
    let mut session = Session::open(cfg)?;

    match action {
        TableCmd::Add { name, rate, notes } => {
            let rate = rate.unwrap_or(cfg.default_rate);
            let t = session
                .state
                .create_table(name.clone(), rate, notes.clone(), &clock);
            let (id, name) = (t.id.clone(), t.name.clone());

            success(format!("Table '{name}' created with id {id}"));
            session.audit("create", &name, &format!("id {id}, rate {rate}"));
        }

        TableCmd::Edit {
            id,
            name,
            rate,
            notes,
        } => {
            let Some(id) = session.resolve(id) else {
                return Ok(());
            };
            let patch = TablePatch {
                name: name.clone(),
                rate: *rate,
                notes: notes.clone(),
            };

            if session.state.update_table(&id, &patch) == Outcome::Applied {
                let name = session.name_of(&id);
                success(format!("Table '{name}' updated"));
                session.audit("update", &name, &format!("{patch:?}"));
            }
        }

        TableCmd::Del { id } => {
            let Some(id) = session.resolve(id) else {
                return Ok(());
            };
            let history_before = session.state.history.len();

            if let Some(removed) = session.state.delete_table(&id, &clock) {
                if session.state.history.len() > history_before {
                    info(format!(
                        "Running session of '{}' billed before deletion",
                        removed.name
                    ));
                }
                success(format!("Table '{}' deleted", removed.name));
                session.audit("delete", &removed.name, &format!("id {}", removed.id));
            }
        }

        TableCmd::Reset { id } => {
            let Some(id) = session.resolve(id) else {
                return Ok(());
            };
            session.state.reset_table(&id);
            let name = session.name_of(&id);
            success(format!("Table '{name}' reset"));
            session.audit("reset", &name, "timer zeroed, no history");
        }

        TableCmd::List { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(&session.state.tables)?);
            } else {
                print_tables(&session.state, cfg, clock.monotonic_ms());
            }
            return Ok(());
        }
    }

    session.commit()
}

/// Table overview at monotonic time `now`, with a totals line.
pub fn print_tables(state: &AppState, cfg: &Config, now: i64) {
    print_frame(&Ticker::snapshot(state, now), cfg);
}

pub fn print_frame(frame: &Frame, cfg: &Config) {
    if frame.views.is_empty() {
        warning("No tables yet. Add one with `cuetimer table add`.");
        return;
    }

    let currency = frame.currency;
    let money = |v: i64| format_currency(v, currency, cfg.usd_divisor);

    let mut out = TextTable::new(&["ID", "NAME", "STATUS", "RATE/H", "ELAPSED", "COST"]);
    for v in &frame.views {
        out.add_row(vec![
            v.id.clone(),
            v.name.clone(),
            colorize_status(v.status),
            money(v.rate),
            format_duration(v.elapsed),
            colorize_amount(&money(v.cost), v.cost),
        ]);
    }

    header(format!(
        "{} table(s), {} running",
        frame.summary.tables, frame.summary.running
    ));
    println!("{}", out.render());
    println!(
        "\nTotal: {}  {}",
        format_duration(frame.summary.total_elapsed),
        money(frame.summary.total_cost)
    );
}
