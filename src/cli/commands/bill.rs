use crate::cli::commands::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::billing::rate_per_minute;
use crate::core::clock::SystemClock;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_status;
use crate::utils::formatting::bold;
use crate::utils::{format_currency, format_duration};

/// Print the running bill of a table. The table is left as it is.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Bill { id, json } = cmd else {
        return Ok(());
    };

    let clock = SystemClock::new();
    let mut session = Session::open(cfg)?;
    let Some(id) = session.resolve(id) else {
        return Ok(());
    };
    let Some(bill) = session.state.bill(&id, &clock) else {
        return Ok(());
    };

    if *json {
        println!("{}", serde_json::to_string_pretty(&bill)?);
    } else {
        let currency = session.state.settings.currency;
        let money = |v: i64| format_currency(v, currency, cfg.usd_divisor);

        header(format!("Bill: {}", bill.table_name));
        println!("Status   : {}", colorize_status(bill.status));
        println!("Elapsed  : {}", format_duration(bill.elapsed));
        println!(
            "Rate     : {}/h ({}/min)",
            money(bill.rate),
            money(rate_per_minute(bill.rate))
        );
        if bill.rounding_minutes > 1 {
            println!("Rounding : {} min", bill.rounding_minutes);
        }
        if bill.service_fee != 0.0 {
            println!("Service  : {}%", bill.service_fee);
        }
        println!("Total    : {}", bold(&money(bill.cost)));
    }

    let msg = format!("{} for {}", bill.cost, format_duration(bill.elapsed));
    session.audit("bill", &bill.table_name, &msg);
    Ok(())
}
