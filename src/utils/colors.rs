/// ANSI color helper utilities for terminal output.
use crate::models::table_status::TableStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Running → green, Paused → yellow, Stopped → grey.
pub fn color_for_status(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Running => GREEN,
        TableStatus::Paused => YELLOW,
        TableStatus::Stopped => GREY,
    }
}

pub fn colorize_status(status: TableStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.as_str(), RESET)
}

/// Zero amounts fade out.
pub fn colorize_amount(value: &str, amount: i64) -> String {
    if amount == 0 {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
