//! Single-table timer.
//!
//! Simpler than the multi-table manager: one rate, no rounding, no
//! service fee, no ledger. `stop` freezes the elapsed time (it can be
//! resumed with `start`), `reset` clears it.
//!
//! When the display is hidden the caller reports it with `suspend` and
//! `resume_visible`; the hidden span is added to the running base, so it
//! is not counted.

use crate::core::calculator::billing::{calculate_cost, rate_per_minute};
use crate::models::table_status::TableStatus;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTimer {
    rate: i64,
    start_time: Option<i64>,
    elapsed: i64,
    hidden_since: Option<i64>,
}

impl SessionTimer {
    pub fn new(rate: i64) -> Self {
        Self {
            rate,
            ..Self::default()
        }
    }

    pub fn set_rate(&mut self, rate: i64) {
        self.rate = rate;
    }

    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn start(&mut self, now: i64) -> bool {
        if self.is_running() {
            return false;
        }
        self.start_time = Some(now - self.elapsed);
        true
    }

    pub fn stop(&mut self, now: i64) -> bool {
        let Some(start) = self.start_time.take() else {
            return false;
        };
        self.elapsed = now - start;
        self.hidden_since = None;
        true
    }

    pub fn reset(&mut self) {
        self.start_time = None;
        self.elapsed = 0;
        self.hidden_since = None;
    }

    /// The view went hidden. Ignored unless running.
    pub fn suspend(&mut self, now: i64) {
        if self.is_running() && self.hidden_since.is_none() {
            self.hidden_since = Some(now);
        }
    }

    /// The view is visible again: shift the base by the hidden span.
    pub fn resume_visible(&mut self, now: i64) {
        if let (Some(hidden), Some(start)) = (self.hidden_since.take(), self.start_time) {
            self.start_time = Some(start + (now - hidden));
        }
    }

    pub fn elapsed(&self, now: i64) -> i64 {
        match self.start_time {
            Some(start) => now - start,
            None => self.elapsed,
        }
    }

    pub fn cost(&self, now: i64) -> i64 {
        calculate_cost(self.elapsed(now), self.rate, 1, 0.0)
    }

    pub fn rate_per_minute(&self) -> i64 {
        rate_per_minute(self.rate)
    }

    /// Ready / Running / Stopped, where Ready means nothing recorded yet.
    pub fn status_label(&self) -> &'static str {
        if self.is_running() {
            TableStatus::Running.as_str()
        } else if self.elapsed > 0 {
            TableStatus::Stopped.as_str()
        } else {
            "ready"
        }
    }
}
