use crate::error::{Result, ScorecardError};
use crate::types::config::RoundFile;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/stableford/config.toml";
pub const LOCAL_SUFFIX: &str = "local.toml";

pub fn load_round(path: &Path) -> Result<RoundFile> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_round_with_global(path, global.as_deref())
}

/// Global defaults, then the round file, then `<stem>.local.toml` beside it.
pub(crate) fn load_round_with_global(path: &Path, global_path: Option<&Path>) -> Result<RoundFile> {
    if !path.exists() {
        return Err(ScorecardError::PathNotFound(path.display().to_string()));
    }

    let mut merged = Value::Table(Map::new());
    if let Some(global) = global_path {
        merge_file_if_exists(&mut merged, global)?;
    }
    merge_file_if_exists(&mut merged, path)?;
    merge_file_if_exists(&mut merged, &local_override_path(path))?;

    let round: RoundFile = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScorecardError::ConfigParse(e.to_string()))?;
    Ok(round)
}

pub fn local_override_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}.{LOCAL_SUFFIX}"))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScorecardError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
