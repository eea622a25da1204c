use crate::cli::commands::session::Session;
use crate::cli::parser::{Commands, SettingsCmd};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::ui::messages::{header, success};
use crate::utils::format_currency;

fn print_settings(settings: &Settings, cfg: &Config) {
    header("Settings");
    println!("roundingMinutes : {}", settings.rounding_minutes);
    println!("serviceFee      : {}%", settings.service_fee);
    println!(
        "currency        : {} (e.g. {})",
        settings.currency.code(),
        format_currency(100_000, settings.currency, cfg.usd_divisor)
    );
    println!("theme           : {}", settings.theme.as_str());
    println!("language        : {}", settings.language.as_str());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Settings { action } = cmd else {
        return Ok(());
    };

    let mut session = Session::open(cfg)?;

    let msg = match action {
        SettingsCmd::Show => {
            print_settings(&session.state.settings, cfg);
            return Ok(());
        }
        SettingsCmd::Set { key, value } => {
            session.state.settings.set(key, value)?;
            format!("{key} = {value}")
        }
        SettingsCmd::ToggleTheme => {
            format!("theme = {}", session.state.settings.toggle_theme().as_str())
        }
        SettingsCmd::ToggleLanguage => format!(
            "language = {}",
            session.state.settings.toggle_language().as_str()
        ),
    };

    success(format!("Setting updated: {msg}"));
    session.audit("settings", "", &msg);
    session.commit()
}
