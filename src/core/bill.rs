//! On-demand bill for one table.
//!
//! A bill is a read-only look at the open session: it never changes the
//! table and never touches the ledger.

use crate::core::calculator::billing::BillingPolicy;
use crate::core::table::TableLogic;
use crate::models::table::Table;
use crate::models::table_status::TableStatus;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub table_id: String,
    pub table_name: String,
    pub status: TableStatus,
    pub elapsed: i64,
    pub rate: i64,
    pub rounding_minutes: i64,
    pub service_fee: f64,
    pub cost: i64,
}

impl Bill {
    pub fn for_table(table: &Table, now: i64, policy: &BillingPolicy) -> Self {
        let elapsed = TableLogic::current_elapsed(table, now);
        Self {
            table_id: table.id.clone(),
            table_name: table.name.clone(),
            status: table.status,
            elapsed,
            rate: table.rate,
            rounding_minutes: policy.rounding_minutes,
            service_fee: policy.service_fee,
            cost: policy.cost(elapsed, table.rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_reads_without_mutating() {
        let mut t = Table::new("7".into(), "Snooker".into(), 30_000, String::new());
        TableLogic::start(&mut t, 0);
        let before = t.clone();

        let policy = BillingPolicy {
            rounding_minutes: 15,
            service_fee: 10.0,
        };
        let bill = Bill::for_table(&t, 901_000, &policy);

        assert_eq!(t, before);
        assert_eq!(bill.elapsed, 901_000);
        assert_eq!(bill.cost, 16_500);
        assert_eq!(bill.status, TableStatus::Running);
    }

    #[test]
    fn stopped_table_bills_zero() {
        let t = Table::new("7".into(), "Snooker".into(), 30_000, String::new());
        let bill = Bill::for_table(&t, 5_000_000, &BillingPolicy::default());
        assert_eq!(bill.cost, 0);
    }
}
