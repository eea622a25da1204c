//! Config file upgrades: add keys introduced after the file was written.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a current config file carries, with the value written when absent.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("default_rate", Value::from(super::default_rate())),
        ("usd_divisor", Value::from(super::default_usd_divisor())),
        ("tick_interval_ms", Value::from(super::default_tick_interval())),
    ]
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration is not a mapping".into())),
    }
}

/// Names of expected keys missing from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let map = parse_mapping(content)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(Value::from(*k)))
        .map(|(k, _)| k)
        .collect())
}

/// Add every missing key to the file at `path`. Returns the keys added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let mut map = parse_mapping(&content)?;

    let mut added = Vec::new();
    for (key, value) in expected_keys() {
        let k = Value::from(key);
        if !map.contains_key(&k) {
            map.insert(k, value);
            added.push(key);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::write(path, serialized)?;
        success(format!("Config migrated: added {}", added.join(", ")));
    }

    Ok(added)
}
