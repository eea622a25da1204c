//! `solo`: one foreground timer, not tied to any stored table.

use crate::cli::commands::watch::cancel_on_ctrlc;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::session_timer::SessionTimer;
use crate::core::ticker::CancelToken;
use crate::errors::AppResult;
use crate::models::settings::Currency;
use crate::ui::messages::{info, success};
use crate::utils::{format_currency, format_duration};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Solo { rate, interval } = cmd else {
        return Ok(());
    };

    let clock = SystemClock::new();
    let mut timer = SessionTimer::new(rate.unwrap_or(cfg.default_rate));
    let period = Duration::from_millis(interval.unwrap_or(cfg.tick_interval_ms).max(50));
    let money = |v: i64| format_currency(v, Currency::Vnd, cfg.usd_divisor);

    let token = CancelToken::new();
    cancel_on_ctrlc(token.clone())?;

    timer.start(clock.monotonic_ms());
    info(format!(
        "Timer {} at {}/min (Ctrl-C to stop)",
        timer.status_label(),
        money(timer.rate_per_minute())
    ));

    while !token.is_cancelled() {
        let now = clock.monotonic_ms();
        print!(
            "\r{}  {}   ",
            format_duration(timer.elapsed(now)),
            money(timer.cost(now))
        );
        io::stdout().flush().ok();
        thread::sleep(period);
    }

    let now = clock.monotonic_ms();
    timer.stop(now);
    println!();
    success(format!(
        "Timer {}: {} → {}",
        timer.status_label(),
        format_duration(timer.elapsed(now)),
        money(timer.cost(now))
    ));
    Ok(())
}
