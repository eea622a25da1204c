//! Table lifecycle: Stopped → Running ⇄ Paused → Stopped.
//!
//! Transitions take the clock readings as plain values so they can be
//! exercised without any time source. An ineligible transition returns
//! `false` (or `None`) and leaves the table untouched.

use crate::core::calculator::billing::BillingPolicy;
use crate::models::history_entry::PendingEntry;
use crate::models::table::Table;
use crate::models::table_status::TableStatus;
use chrono::{DateTime, Local, TimeDelta};

pub struct TableLogic;

impl TableLogic {
    /// Start, or resume from pause counting on from `paused_elapsed`.
    pub fn start(table: &mut Table, now: i64) -> bool {
        if table.status == TableStatus::Running {
            return false;
        }

        table.status = TableStatus::Running;
        table.start_time = Some(now - table.paused_elapsed);
        true
    }

    pub fn pause(table: &mut Table, now: i64) -> bool {
        if table.status != TableStatus::Running || table.start_time.is_none() {
            return false;
        }

        table.paused_elapsed = Self::current_elapsed(table, now);
        table.status = TableStatus::Paused;
        table.start_time = None;
        true
    }

    /// Close the running or paused session.
    ///
    /// Returns the record to append to the ledger when the session lasted
    /// longer than zero. The table is left as a fresh `Stopped` table; only
    /// `cost` keeps the amount just billed.
    pub fn stop(
        table: &mut Table,
        now: i64,
        wall_now: DateTime<Local>,
        policy: &BillingPolicy,
    ) -> Option<PendingEntry> {
        if !table.status.is_active() {
            return None;
        }

        table.elapsed_time = Self::current_elapsed(table, now);
        table.status = TableStatus::Stopped;
        table.cost = policy.cost(table.elapsed_time, table.rate);

        let pending = (table.elapsed_time > 0).then(|| PendingEntry {
            table_id: table.id.clone(),
            table_name: table.name.clone(),
            start_time: (wall_now - TimeDelta::milliseconds(table.elapsed_time)).to_rfc3339(),
            end_time: wall_now.to_rfc3339(),
            duration: table.elapsed_time,
            rate: table.rate,
            cost: table.cost,
            notes: table.notes.clone(),
        });

        table.start_time = None;
        table.paused_elapsed = 0;
        table.elapsed_time = 0;

        pending
    }

    /// Drop the current session without billing it.
    pub fn reset(table: &mut Table) {
        table.status = TableStatus::Stopped;
        table.start_time = None;
        table.paused_elapsed = 0;
        table.elapsed_time = 0;
        table.cost = 0;
    }

    /// Elapsed time right now, derived from stored fields only. Never
    /// negative, even if `now` reads earlier than the stored start.
    pub fn current_elapsed(table: &Table, now: i64) -> i64 {
        match table.status {
            TableStatus::Running => table.start_time.map(|s| (now - s).max(0)).unwrap_or(0),
            TableStatus::Paused => table.paused_elapsed,
            TableStatus::Stopped => table.elapsed_time,
        }
    }

    pub fn current_cost(table: &Table, now: i64, policy: &BillingPolicy) -> i64 {
        policy.cost(Self::current_elapsed(table, now), table.rate)
    }
}
