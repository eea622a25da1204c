//! Load → mutate → save cycle shared by the state-changing commands.

use crate::config::Config;
use crate::core::app::AppState;
use crate::db::pool::DbPool;
use crate::db::state::{load_state, save_state};
use crate::db::store::StateStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub struct Session {
    pub pool: DbPool,
    pub state: AppState,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let mut pool = DbPool::new(&cfg.database)?;
        let state = load_state(&mut pool)?;
        Ok(Self { pool, state })
    }

    /// Table id for an id or name, warning when nothing matches.
    pub fn resolve(&self, key: &str) -> Option<String> {
        let found = self.state.resolve(key);
        if found.is_none() {
            warning(format!("Table '{key}' not found."));
        }
        found
    }

    /// Display name of a table, falling back to its id.
    pub fn name_of(&self, id: &str) -> String {
        self.state
            .get(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Internal log line. Failures are reported, never fatal.
    pub fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.pool.audit(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn commit(mut self) -> AppResult<()> {
        save_state(&mut self.pool, &self.state)
    }
}
