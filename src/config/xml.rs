//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - Unknown XML fields are a hard error so typos surface immediately.
//! - A missing file at the default location means "use defaults"; a missing file named
//!   by FSMOVE_CONFIG is an error.

use anyhow::{Context, Result, anyhow, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::CONFIG_ENV;
use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, ErrorPolicy, LogLevel};
use crate::platform::{set_dir_mode_0700, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    on_move_error: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();
    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(s) = non_empty(parsed.on_move_error.as_deref()) {
        cfg.error_policy = s.parse::<ErrorPolicy>().map_err(|e| anyhow!(e))?;
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Resolve the config location and load it, falling back to defaults when the default
/// location has no file.
pub fn load_config() -> Result<Config> {
    let path = default_config_path().context("resolve config path")?;
    if !path.exists() {
        if env::var_os(CONFIG_ENV).is_some() {
            bail!("{CONFIG_ENV} points to '{}', which does not exist", path.display());
        }
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(Config::default());
    }
    let cfg = load_config_from_xml_path(&path)?;
    debug!(path = %path.display(), ?cfg, "Loaded config");
    Ok(cfg)
}

/// Write the template config at `path`. Refuses symlinked ancestors and existing files.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!("Refusing to create config: ancestor of {} is a symlink", path.display());
    }
    if path.exists() {
        bail!("Config already exists at {}", path.display());
    }

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        let _ = set_dir_mode_0700(parent);
    }

    let content = format!(
        "<!--\n  fsmove configuration (XML)\n\n    log_level      -> quiet | normal | info | debug\n    log_file       -> path to a log file (optional; leave empty to log to stderr only)\n    on_move_error  -> halt (stop at the first failed move) | continue\n\n  CLI flags override these values.\n-->\n<config>\n  <log_level>{}</log_level>\n  <log_file></log_file>\n  <on_move_error>{}</on_move_error>\n</config>\n",
        LogLevel::default(),
        ErrorPolicy::default(),
    );

    write_config_secure_new_0600(path, content.as_bytes())
        .with_context(|| format!("write config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}
