use serde::{Deserialize, Serialize};

/// Lifecycle state of a pool table. Exactly one at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Stopped => "stopped",
            TableStatus::Running => "running",
            TableStatus::Paused => "paused",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stopped" => Some(Self::Stopped),
            "running" => Some(Self::Running),
            "paused" => Some(Self::Paused),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TableStatus::Running)
    }

    /// Running or Paused: a session is open and not yet billed.
    pub fn is_active(&self) -> bool {
        matches!(self, TableStatus::Running | TableStatus::Paused)
    }
}
