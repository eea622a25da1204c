use crate::cli::commands::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut session = Session::open(cfg)?;

        let written =
            ExportLogic::export(&session.state, *format, file.as_deref(), *force, Local::now())?;

        if let Some(path) = written {
            let msg = format!(
                "{} history entries to {}",
                session.state.history.len(),
                path.display()
            );
            session.audit("export", format.as_str(), &msg);
        }
    }
    Ok(())
}
