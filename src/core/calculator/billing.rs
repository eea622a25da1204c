//! Billing: elapsed milliseconds + hourly rate → integer amount.

use crate::models::settings::Settings;

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;

/// The two settings that influence a bill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingPolicy {
    pub rounding_minutes: i64,
    pub service_fee: f64, // percent
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            rounding_minutes: 1,
            service_fee: 0.0,
        }
    }
}

impl From<&Settings> for BillingPolicy {
    fn from(s: &Settings) -> Self {
        Self {
            rounding_minutes: s.rounding_minutes,
            service_fee: s.service_fee,
        }
    }
}

impl BillingPolicy {
    pub fn cost(&self, elapsed_ms: i64, hourly_rate: i64) -> i64 {
        calculate_cost(
            elapsed_ms,
            hourly_rate,
            self.rounding_minutes,
            self.service_fee,
        )
    }
}

/// Cost of `elapsed_ms` at `hourly_rate`.
///
/// With `rounding_minutes > 1` the elapsed time is billed in whole
/// intervals, always rounding up. The service fee is applied on top of
/// the (rounded) base, then the result is rounded to a whole unit.
/// Inputs are not validated.
pub fn calculate_cost(
    elapsed_ms: i64,
    hourly_rate: i64,
    rounding_minutes: i64,
    service_fee_percent: f64,
) -> i64 {
    let rate = hourly_rate as f64;

    let base = if rounding_minutes > 1 {
        let minutes = elapsed_ms as f64 / MS_PER_MINUTE as f64;
        let interval = rounding_minutes as f64;
        let billed_minutes = (minutes / interval).ceil() * interval;
        rate * (billed_minutes / 60.0)
    } else {
        rate * elapsed_ms as f64 / MS_PER_HOUR as f64
    };

    (base * (1.0 + service_fee_percent / 100.0)).round() as i64
}

/// Per-minute price shown next to the hourly rate.
pub fn rate_per_minute(hourly_rate: i64) -> i64 {
    (hourly_rate as f64 / 60.0).round() as i64
}
