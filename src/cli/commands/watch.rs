use crate::cli::commands::table::{print_frame, print_tables};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::ticker::{CancelToken, Ticker};
use crate::db::pool::DbPool;
use crate::db::state::load_state;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::thread;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Cancel `token` on Ctrl-C.
pub(crate) fn cancel_on_ctrlc(token: CancelToken) -> AppResult<()> {
    ctrlc::set_handler(move || token.cancel())
        .map_err(|e| AppError::Other(format!("cannot install Ctrl-C handler: {e}")))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Watch { interval, once } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let clock = SystemClock::new();

    if *once {
        print_tables(&load_state(&mut pool)?, cfg, clock.monotonic_ms());
        return Ok(());
    }

    let period = Duration::from_millis(interval.unwrap_or(cfg.tick_interval_ms).max(50));
    let ticker = Ticker::new(period);
    cancel_on_ctrlc(ticker.token())?;
    info(format!(
        "Refreshing every {} ms while a table is running.",
        ticker.interval().as_millis()
    ));

    // other invocations start and stop tables meanwhile: re-read every tick
    let frames = ticker.run(
        &clock,
        || load_state(&mut pool),
        |frame| {
            print!("{CLEAR_SCREEN}");
            print_frame(frame, cfg);
            println!("\n(Ctrl-C to stop)");
        },
        thread::sleep,
    )?;

    info(format!("Updates stopped after {frames} frame(s)."));
    Ok(())
}
