//! Periodic refresh.
//!
//! Each tick derives a `Frame` from the stored table fields; it never
//! writes to a table, so any number of ticks without a transition in
//! between produce the same numbers for paused and stopped tables and
//! drift-free numbers for running ones.
//!
//! Other invocations change the stored state while the loop runs, so the
//! state is reloaded through the caller's loader on every tick.

use crate::core::app::AppState;
use crate::core::calculator::billing::BillingPolicy;
use crate::core::clock::Clock;
use crate::core::table::TableLogic;
use crate::errors::AppResult;
use crate::models::settings::Currency;
use crate::models::table_status::TableStatus;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared stop flag. Cancelling is permanent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub id: String,
    pub name: String,
    pub status: TableStatus,
    pub rate: i64,
    pub elapsed: i64,
    pub cost: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub tables: usize,
    pub running: usize,
    pub total_elapsed: i64,
    pub total_cost: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub views: Vec<TableView>,
    pub summary: Summary,
    pub currency: Currency,
}

impl Frame {
    pub fn has_running(&self) -> bool {
        self.summary.running > 0
    }
}

pub struct Ticker {
    interval: Duration,
    token: CancelToken,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            token: CancelToken::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle that stops the loop from elsewhere (e.g. a Ctrl-C handler).
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Stop updates. No frame is rendered after this returns.
    pub fn stop_updates(&self) {
        self.token.cancel();
    }

    /// Read-only view of every table at monotonic time `now`.
    pub fn snapshot(state: &AppState, now: i64) -> Frame {
        let policy: BillingPolicy = state.policy();
        let mut summary = Summary {
            tables: state.tables.len(),
            ..Summary::default()
        };

        let views = state
            .tables
            .iter()
            .map(|t| {
                let elapsed = TableLogic::current_elapsed(t, now);
                let cost = policy.cost(elapsed, t.rate);

                summary.total_elapsed += elapsed;
                summary.total_cost += cost;
                if t.status.is_running() {
                    summary.running += 1;
                }

                TableView {
                    id: t.id.clone(),
                    name: t.name.clone(),
                    status: t.status,
                    rate: t.rate,
                    elapsed,
                    cost,
                }
            })
            .collect();

        Frame {
            views,
            summary,
            currency: state.settings.currency,
        }
    }

    /// Render once, then once per interval while any table is running,
    /// until the token is cancelled. `load` fetches the current state for
    /// each frame; `sleep` is injected so the loop can be driven without
    /// real time. Returns the number of frames rendered.
    pub fn run<L, R, S>(&self, clock: &dyn Clock, mut load: L, mut render: R, mut sleep: S) -> AppResult<usize>
    where
        L: FnMut() -> AppResult<AppState>,
        R: FnMut(&Frame),
        S: FnMut(Duration),
    {
        if self.token.is_cancelled() {
            return Ok(0);
        }

        render(&Self::snapshot(&load()?, clock.monotonic_ms()));
        let mut rendered = 1;

        loop {
            sleep(self.interval);
            if self.token.is_cancelled() {
                break;
            }

            let frame = Self::snapshot(&load()?, clock.monotonic_ms());
            if frame.has_running() {
                render(&frame);
                rendered += 1;
            }
        }

        Ok(rendered)
    }
}
