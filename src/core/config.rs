use crate::config::Config;
use crate::config::migrate::{fill_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration (file values plus `--db` override) as YAML.
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report keys missing from the config file; with `fix`, add them.
    pub fn check(path: &Path, fix: bool) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {} (run `cuetimer init`)",
                path.display()
            )));
        }

        if fix {
            let added = fill_missing_keys(path)?;
            if added.is_empty() {
                info("Configuration is up to date.");
            }
            return Ok(added);
        }

        let missing = missing_keys(&fs::read_to_string(path)?)?;
        if missing.is_empty() {
            success("Configuration is complete.");
        } else {
            warning(format!(
                "Missing keys: {} (run `cuetimer config --migrate`)",
                missing.join(", ")
            ));
        }
        Ok(missing)
    }

    /// Open the config file in `editor`, `$EDITOR`/`$VISUAL`, or the platform
    /// default, retrying once with the default when the requested editor fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if Self::launch(&requested, path) {
            success(format!("Configuration file edited using '{requested}'"));
            return Ok(());
        }

        if requested == default_editor {
            return Err(AppError::Config(format!("editor '{requested}' failed")));
        }

        warning(format!(
            "Editor '{requested}' not available, falling back to '{default_editor}'"
        ));
        if Self::launch(&default_editor, path) {
            success(format!("Configuration file edited using '{default_editor}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "fallback editor '{default_editor}' failed"
            )))
        }
    }

    fn launch(editor: &str, path: &Path) -> bool {
        Command::new(editor)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_then_fixes() {
        let path = std::env::temp_dir().join("cuetimer_core_config_check.conf");
        fs::write(&path, "database: /tmp/a.sqlite\n").unwrap();

        let missing = ConfigLogic::check(&path, false).unwrap();
        assert_eq!(missing.len(), 3);

        ConfigLogic::check(&path, true).unwrap();
        assert!(ConfigLogic::check(&path, false).unwrap().is_empty());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn check_without_file_is_an_error() {
        let path = std::env::temp_dir().join("cuetimer_core_config_absent.conf");
        fs::remove_file(&path).ok();
        assert!(ConfigLogic::check(&path, false).is_err());
    }
}
