//! Start / pause / stop, the space-bar toggle and single-key shortcuts.

use crate::cli::commands::session::Session;
use crate::cli::parser::{Commands, Target};
use crate::config::Config;
use crate::core::app::{Outcome, ToggleAction};
use crate::core::clock::SystemClock;
use crate::core::shortcuts::Shortcut;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_currency;

#[derive(Clone, Copy)]
enum Transition {
    Start,
    Pause,
    Stop,
}

impl Transition {
    fn operation(self) -> &'static str {
        match self {
            Transition::Start => "start",
            Transition::Pause => "pause",
            Transition::Stop => "stop",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Transition::Start => "Started",
            Transition::Pause => "Paused",
            Transition::Stop => "Stopped",
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let clock = SystemClock::new();
    let mut session = Session::open(cfg)?;

    match cmd {
        Commands::Start(target) => transition(&mut session, target, Transition::Start, cfg)?,
        Commands::Pause(target) => transition(&mut session, target, Transition::Pause, cfg)?,
        Commands::Stop(target) => transition(&mut session, target, Transition::Stop, cfg)?,

        Commands::Toggle => {
            let msg = match session.state.toggle_all(&clock) {
                ToggleAction::PausedAll(n) => format!("Paused {n} table(s)"),
                ToggleAction::StartedAll(n) => format!("Started {n} table(s)"),
            };
            success(&msg);
            session.audit("toggle", "", &msg);
        }

        Commands::Key { key } => {
            let shortcut = Shortcut::parse(key)?;
            let msg = shortcut.apply(&mut session.state, cfg.default_rate, &clock);
            if !shortcut.is_mutating() {
                info(msg);
                return Ok(());
            }
            success(&msg);
            session.audit("key", key, &msg);
        }

        _ => return Ok(()),
    }

    session.commit()
}

fn transition(
    session: &mut Session,
    target: &Target,
    action: Transition,
    cfg: &Config,
) -> AppResult<()> {
    let clock = SystemClock::new();

    if target.all {
        let n = match action {
            Transition::Start => session.state.start_all(&clock),
            Transition::Pause => session.state.pause_all(&clock),
            Transition::Stop => session.state.stop_all(&clock),
        };
        let msg = format!("{} {n} table(s)", action.past());
        success(&msg);
        session.audit(action.operation(), "all", &msg);
        return Ok(());
    }

    let Some(key) = &target.id else {
        return Ok(());
    };
    let Some(id) = session.resolve(key) else {
        return Ok(());
    };

    let history_before = session.state.history.len();
    let outcome = match action {
        Transition::Start => session.state.start_table(&id, &clock),
        Transition::Pause => session.state.pause_table(&id, &clock),
        Transition::Stop => session.state.stop_table(&id, &clock),
    };
    let name = session.name_of(&id);

    match outcome {
        Outcome::Applied => {
            let mut msg = format!("{} '{name}'", action.past());
            if session.state.history.len() > history_before
                && let Some(entry) = session.state.history.entries().last()
            {
                let currency = session.state.settings.currency;
                msg.push_str(&format!(
                    ", billed {}",
                    format_currency(entry.cost, currency, cfg.usd_divisor)
                ));
            }
            success(&msg);
            session.audit(action.operation(), &name, &msg);
        }
        Outcome::Ignored => info(format!(
            "'{name}' is already {}",
            session
                .state
                .get(&id)
                .map(|t| t.status.as_str())
                .unwrap_or("stopped")
        )),
        Outcome::NotFound => {}
    }

    Ok(())
}
