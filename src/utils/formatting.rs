//! Formatting utilities used for CLI and export outputs.

use crate::models::settings::Currency;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `HH:MM:SS`, hours not wrapped at 24. Negative input shows as zero.
pub fn format_duration(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Digits of `n` grouped by three with `sep`.
pub fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Amount in the hall's currency unit, shown in `currency`.
///
/// VND is shown as-is with Vietnamese grouping; USD divides by
/// `usd_divisor` (a configured, fixed rate) and shows cents.
pub fn format_currency(amount: i64, currency: Currency, usd_divisor: f64) -> String {
    let sign = if amount < 0 { "-" } else { "" };

    match currency {
        Currency::Vnd => {
            format!("{sign}{} ₫", group_thousands(amount.unsigned_abs(), '.'))
        }
        Currency::Usd => {
            let cents = (amount.unsigned_abs() as f64 / usd_divisor * 100.0).round() as u64;
            format!(
                "{sign}${}.{:02}",
                group_thousands(cents / 100, ','),
                cents % 100
            )
        }
    }
}
