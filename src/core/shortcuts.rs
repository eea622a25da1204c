//! Single-key shortcuts mapped onto the command surface.

use crate::core::app::{AppState, ToggleAction};
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleAll,
    NewTable,
    ToggleTheme,
    ToggleLanguage,
    StartAll,
    PauseAll,
    CloseModal,
}

impl Shortcut {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            " " | "space" => Some(Shortcut::ToggleAll),
            "n" => Some(Shortcut::NewTable),
            "t" => Some(Shortcut::ToggleTheme),
            "l" => Some(Shortcut::ToggleLanguage),
            "s" => Some(Shortcut::StartAll),
            "p" => Some(Shortcut::PauseAll),
            "escape" | "esc" => Some(Shortcut::CloseModal),
            _ => None,
        }
    }

    pub fn parse(key: &str) -> AppResult<Self> {
        Self::from_key(key).ok_or_else(|| AppError::UnknownShortcut(key.to_string()))
    }

    /// Whether the shortcut changes persisted state.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Shortcut::CloseModal)
    }

    /// Run the shortcut and describe what happened.
    pub fn apply(&self, state: &mut AppState, default_rate: i64, clock: &dyn Clock) -> String {
        match self {
            Shortcut::ToggleAll => match state.toggle_all(clock) {
                ToggleAction::PausedAll(n) => format!("Paused {n} table(s)"),
                ToggleAction::StartedAll(n) => format!("Started {n} table(s)"),
            },
            Shortcut::NewTable => {
                let t = state.create_table(None, default_rate, None, clock);
                format!("Created {} ({})", t.name, t.id)
            }
            Shortcut::ToggleTheme => {
                format!("Theme: {}", state.settings.toggle_theme().as_str())
            }
            Shortcut::ToggleLanguage => {
                format!("Language: {}", state.settings.toggle_language().as_str())
            }
            Shortcut::StartAll => format!("Started {} table(s)", state.start_all(clock)),
            Shortcut::PauseAll => format!("Paused {} table(s)", state.pause_all(clock)),
            Shortcut::CloseModal => "Nothing to close".to_string(),
        }
    }
}
