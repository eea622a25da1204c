//! Time sources.
//!
//! Durations are always computed from `monotonic_ms`; `wall_now` is only
//! used for the human-readable timestamps stored in history entries.

use chrono::{DateTime, Local, TimeDelta};
use std::cell::Cell;
use std::time::Instant;

pub trait Clock {
    /// Milliseconds on a clock that never goes backwards.
    fn monotonic_ms(&self) -> i64;

    /// Current wall-clock time.
    fn wall_now(&self) -> DateTime<Local>;
}

/// Process clock.
///
/// The monotonic reading is the wall clock sampled once at construction
/// plus an `Instant` delta. Inside one process it is immune to clock
/// changes; across processes it stays comparable to values written by
/// an earlier invocation, but only as far as the wall clock is: a clock
/// set backwards between two invocations reads as zero elapsed time
/// (see `TableLogic::current_elapsed`).
pub struct SystemClock {
    anchor_ms: i64,
    anchor: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            anchor_ms: Local::now().timestamp_millis(),
            anchor: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic_ms(&self) -> i64 {
        self.anchor_ms + self.anchor.elapsed().as_millis() as i64
    }

    fn wall_now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Hand-driven clock for tests. Both readings move together.
pub struct ManualClock {
    mono: Cell<i64>,
    wall: Cell<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            mono: Cell::new(start_ms),
            wall: Cell::new(Local::now()),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.mono.set(self.mono.get() + ms);
        self.wall.set(self.wall.get() + TimeDelta::milliseconds(ms));
    }

    /// Move only the wall clock, e.g. an NTP correction.
    pub fn shift_wall(&self, ms: i64) {
        self.wall.set(self.wall.get() + TimeDelta::milliseconds(ms));
    }
}

impl Clock for ManualClock {
    fn monotonic_ms(&self) -> i64 {
        self.mono.get()
    }

    fn wall_now(&self) -> DateTime<Local> {
        self.wall.get()
    }
}
