//! Owned application state: tables, settings and the history ledger.
//!
//! Nothing here touches storage. Callers load an `AppState`, apply
//! operations and hand it back to `db::state` to be written.

use crate::core::bill::Bill;
use crate::core::calculator::billing::BillingPolicy;
use crate::core::clock::Clock;
use crate::core::ledger::HistoryLedger;
use crate::core::table::TableLogic;
use crate::models::history_entry::HistoryEntry;
use crate::models::settings::Settings;
use crate::models::table::{Table, TablePatch};
use crate::models::table_status::TableStatus;

/// Result of an operation addressed to one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotFound,
    Ignored,
    Applied,
}

impl Outcome {
    fn from_applied(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// What the space-bar toggle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    PausedAll(usize),
    StartedAll(usize),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tables: Vec<Table>,
    pub settings: Settings,
    pub history: HistoryLedger,
}

impl AppState {
    pub fn new(tables: Vec<Table>, settings: Settings, history: HistoryLedger) -> Self {
        Self {
            tables,
            settings,
            history,
        }
    }

    pub fn policy(&self) -> BillingPolicy {
        BillingPolicy::from(&self.settings)
    }

    // ------------------------------------------------
    // Lookup
    // ------------------------------------------------

    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    /// Accept either an id or a (case-insensitive) table name.
    pub fn resolve(&self, key: &str) -> Option<String> {
        self.get(key)
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|t| t.name.eq_ignore_ascii_case(key))
            })
            .map(|t| t.id.clone())
    }

    /// History entries of one table, looked up through its references.
    pub fn sessions_of(&self, id: &str) -> Vec<&HistoryEntry> {
        self.get(id)
            .map(|t| {
                t.sessions
                    .iter()
                    .filter_map(|sid| self.history.get(*sid))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ------------------------------------------------
    // Table management
    // ------------------------------------------------

    pub fn create_table(
        &mut self,
        name: Option<String>,
        rate: i64,
        notes: Option<String>,
        clock: &dyn Clock,
    ) -> &Table {
        let mut id = clock.wall_now().timestamp_millis();
        while self.get(&id.to_string()).is_some() {
            id += 1;
        }

        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Table {}", self.tables.len() + 1));

        self.tables.push(Table::new(
            id.to_string(),
            name,
            rate,
            notes.unwrap_or_default(),
        ));

        let idx = self.tables.len() - 1;
        &self.tables[idx]
    }

    pub fn update_table(&mut self, id: &str, patch: &TablePatch) -> Outcome {
        match self.get_mut(id) {
            Some(t) => {
                t.apply_patch(patch);
                Outcome::Applied
            }
            None => Outcome::NotFound,
        }
    }

    /// Remove a table. A running session is stopped (and billed) first;
    /// a paused one is dropped.
    pub fn delete_table(&mut self, id: &str, clock: &dyn Clock) -> Option<Table> {
        let idx = self.tables.iter().position(|t| t.id == id)?;

        if self.tables[idx].status.is_running() {
            self.stop_table(id, clock);
        }

        Some(self.tables.remove(idx))
    }

    pub fn reset_table(&mut self, id: &str) -> Outcome {
        match self.get_mut(id) {
            Some(t) => {
                TableLogic::reset(t);
                Outcome::Applied
            }
            None => Outcome::NotFound,
        }
    }

    // ------------------------------------------------
    // Transitions
    // ------------------------------------------------

    pub fn start_table(&mut self, id: &str, clock: &dyn Clock) -> Outcome {
        let now = clock.monotonic_ms();
        match self.get_mut(id) {
            Some(t) => Outcome::from_applied(TableLogic::start(t, now)),
            None => Outcome::NotFound,
        }
    }

    pub fn pause_table(&mut self, id: &str, clock: &dyn Clock) -> Outcome {
        let now = clock.monotonic_ms();
        match self.get_mut(id) {
            Some(t) => Outcome::from_applied(TableLogic::pause(t, now)),
            None => Outcome::NotFound,
        }
    }

    /// Stop a table and append its session to the ledger when non-empty.
    pub fn stop_table(&mut self, id: &str, clock: &dyn Clock) -> Outcome {
        let policy = self.policy();
        let now = clock.monotonic_ms();
        let wall = clock.wall_now();

        let Some(table) = self.tables.iter_mut().find(|t| t.id == id) else {
            return Outcome::NotFound;
        };

        if !table.status.is_active() {
            return Outcome::Ignored;
        }

        if let Some(pending) = TableLogic::stop(table, now, wall, &policy) {
            let entry_id = self.history.record(pending);
            table.sessions.push(entry_id);
        }

        Outcome::Applied
    }

    // ------------------------------------------------
    // Bulk
    // ------------------------------------------------

    fn ids_where(&self, pred: impl Fn(TableStatus) -> bool) -> Vec<String> {
        self.tables
            .iter()
            .filter(|t| pred(t.status))
            .map(|t| t.id.clone())
            .collect()
    }

    pub fn start_all(&mut self, clock: &dyn Clock) -> usize {
        self.ids_where(|s| !s.is_running())
            .iter()
            .filter(|id| self.start_table(id, clock).is_applied())
            .count()
    }

    pub fn pause_all(&mut self, clock: &dyn Clock) -> usize {
        self.ids_where(|s| s.is_running())
            .iter()
            .filter(|id| self.pause_table(id, clock).is_applied())
            .count()
    }

    pub fn stop_all(&mut self, clock: &dyn Clock) -> usize {
        self.ids_where(|s| s.is_active())
            .iter()
            .filter(|id| self.stop_table(id, clock).is_applied())
            .count()
    }

    /// Pause everything if anything runs, otherwise start everything.
    pub fn toggle_all(&mut self, clock: &dyn Clock) -> ToggleAction {
        if self.tables.iter().any(|t| t.status.is_running()) {
            ToggleAction::PausedAll(self.pause_all(clock))
        } else {
            ToggleAction::StartedAll(self.start_all(clock))
        }
    }

    // ------------------------------------------------
    // History & billing
    // ------------------------------------------------

    /// Empty the ledger and every table's references into it.
    pub fn clear_history(&mut self) -> usize {
        for t in &mut self.tables {
            t.sessions.clear();
        }
        self.history.clear()
    }

    pub fn bill(&self, id: &str, clock: &dyn Clock) -> Option<Bill> {
        let policy = self.policy();
        self.get(id)
            .map(|t| Bill::for_table(t, clock.monotonic_ms(), &policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;

    fn state_with(n: usize, clock: &ManualClock) -> (AppState, Vec<String>) {
        let mut state = AppState::default();
        let ids = (0..n)
            .map(|_| state.create_table(None, 30_000, None, clock).id.clone())
            .collect();
        (state, ids)
    }

    #[test]
    fn create_assigns_unique_ids_and_default_names() {
        let clock = ManualClock::new(0);
        let (state, ids) = state_with(3, &clock);

        assert_eq!(ids.len(), 3);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_eq!(state.tables[0].name, "Table 1");
        assert_eq!(state.tables[2].name, "Table 3");
        assert!(state.tables.iter().all(|t| t.status == TableStatus::Stopped));
    }

    #[test]
    fn blank_name_falls_back_to_default() {
        let clock = ManualClock::new(0);
        let mut state = AppState::default();
        let t = state.create_table(Some("   ".into()), 1, None, &clock);
        assert_eq!(t.name, "Table 1");
    }

    #[test]
    fn resolve_by_id_or_name() {
        let clock = ManualClock::new(0);
        let mut state = AppState::default();
        let id = state
            .create_table(Some("VIP".into()), 50_000, None, &clock)
            .id
            .clone();

        assert_eq!(state.resolve(&id), Some(id.clone()));
        assert_eq!(state.resolve("vip"), Some(id));
        assert_eq!(state.resolve("nope"), None);
    }

    #[test]
    fn missing_table_is_a_no_op() {
        let clock = ManualClock::new(0);
        let (mut state, _) = state_with(1, &clock);
        let before = state.tables.clone();

        assert_eq!(state.start_table("ghost", &clock), Outcome::NotFound);
        assert_eq!(state.pause_table("ghost", &clock), Outcome::NotFound);
        assert_eq!(state.stop_table("ghost", &clock), Outcome::NotFound);
        assert_eq!(state.reset_table("ghost"), Outcome::NotFound);
        assert_eq!(
            state.update_table("ghost", &TablePatch::default()),
            Outcome::NotFound
        );
        assert!(state.delete_table("ghost", &clock).is_none());
        assert!(state.bill("ghost", &clock).is_none());
        assert_eq!(state.tables, before);
    }

    #[test]
    fn stop_records_one_entry_and_links_it() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(1, &clock);

        state.start_table(&ids[0], &clock);
        clock.advance(1_800_000);
        assert_eq!(state.stop_table(&ids[0], &clock), Outcome::Applied);

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.tables[0].sessions, vec![1]);
        assert_eq!(state.sessions_of(&ids[0])[0].cost, 15_000);

        // second stop is ignored and adds nothing
        assert_eq!(state.stop_table(&ids[0], &clock), Outcome::Ignored);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn immediate_stop_leaves_no_history() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(1, &clock);

        state.start_table(&ids[0], &clock);
        assert_eq!(state.stop_table(&ids[0], &clock), Outcome::Applied);
        assert!(state.history.is_empty());
        assert!(state.tables[0].sessions.is_empty());
    }

    #[test]
    fn resume_sums_both_running_intervals() {
        let clock = ManualClock::new(10_000);
        let (mut state, ids) = state_with(1, &clock);
        let id = &ids[0];

        state.start_table(id, &clock);
        clock.advance(600_000);
        state.pause_table(id, &clock);
        clock.advance(3_000_000); // paused gap, not billed
        state.start_table(id, &clock);
        clock.advance(1_200_000);
        state.stop_table(id, &clock);

        assert_eq!(state.history.entries()[0].duration, 1_800_000);
    }

    #[test]
    fn bulk_operations_skip_ineligible_tables() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(3, &clock);

        state.start_table(&ids[0], &clock);
        clock.advance(1_000);
        assert_eq!(state.start_all(&clock), 2);
        assert!(state.tables.iter().all(|t| t.status.is_running()));
        // the table that was already running kept its original start
        assert_eq!(state.tables[0].start_time, Some(0));

        clock.advance(1_000);
        state.pause_table(&ids[1], &clock);
        assert_eq!(state.pause_all(&clock), 2);

        state.reset_table(&ids[2]);
        clock.advance(1_000);
        assert_eq!(state.stop_all(&clock), 2);
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn toggle_pauses_when_anything_runs() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(2, &clock);

        assert_eq!(state.toggle_all(&clock), ToggleAction::StartedAll(2));
        clock.advance(5_000);
        assert_eq!(state.toggle_all(&clock), ToggleAction::PausedAll(2));

        state.start_table(&ids[0], &clock);
        assert_eq!(state.toggle_all(&clock), ToggleAction::PausedAll(1));
    }

    #[test]
    fn delete_bills_a_running_session() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(2, &clock);

        state.start_table(&ids[0], &clock);
        clock.advance(60_000);

        let removed = state.delete_table(&ids[0], &clock).unwrap();
        assert_eq!(removed.id, ids[0]);
        assert_eq!(state.tables.len(), 1);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history.entries()[0].table_id, ids[0]);
    }

    #[test]
    fn delete_drops_a_paused_session_unbilled() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(2, &clock);

        state.start_table(&ids[0], &clock);
        clock.advance(60_000);
        state.pause_table(&ids[0], &clock);

        let removed = state.delete_table(&ids[0], &clock).unwrap();
        assert_eq!(removed.status, TableStatus::Paused);
        assert_eq!(state.tables.len(), 1);
        assert!(state.history.is_empty());
    }

    #[test]
    fn clear_history_drops_table_references() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(1, &clock);

        state.start_table(&ids[0], &clock);
        clock.advance(60_000);
        state.stop_table(&ids[0], &clock);
        assert_eq!(state.tables[0].sessions.len(), 1);

        assert_eq!(state.clear_history(), 1);
        assert!(state.history.is_empty());
        assert!(state.tables[0].sessions.is_empty());
        assert!(state.sessions_of(&ids[0]).is_empty());
    }

    #[test]
    fn update_patches_only_given_fields() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(1, &clock);

        let patch = TablePatch {
            rate: Some(40_000),
            ..TablePatch::default()
        };
        assert!(state.update_table(&ids[0], &patch).is_applied());
        assert_eq!(state.tables[0].rate, 40_000);
        assert_eq!(state.tables[0].name, "Table 1");
    }

    #[test]
    fn settings_change_is_picked_up_by_bills() {
        let clock = ManualClock::new(0);
        let (mut state, ids) = state_with(1, &clock);

        state.start_table(&ids[0], &clock);
        clock.advance(901_000);
        assert_eq!(state.bill(&ids[0], &clock).unwrap().cost, 7_508);

        state.settings.rounding_minutes = 15;
        state.settings.service_fee = 10.0;
        assert_eq!(state.bill(&ids[0], &clock).unwrap().cost, 16_500);
    }
}
