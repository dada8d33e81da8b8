use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use booking_core::LogoutPolicy;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub assets_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub logout_policy: LogoutPolicy,
    pub log_filter: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("./assets"),
            catalog_path: None,
            logout_policy: LogoutPolicy::PreserveTickets,
            log_filter: "info".to_string(),
        }
    }
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub assets_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub clear_tickets_on_logout: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    assets_dir: Option<PathBuf>,
    catalog: Option<PathBuf>,
    clear_tickets_on_logout: Option<bool>,
    log_filter: Option<String>,
}

/// Layers defaults, the optional config file, `BOOKING_*` environment
/// variables and CLI flags, in that order.
pub fn load_startup_config(
    config_path: &Path,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<StartupConfig> {
    let mut config = StartupConfig::default();

    if let Some(file_cfg) = read_config_file(config_path)? {
        if let Some(v) = file_cfg.assets_dir {
            config.assets_dir = v;
        }
        if let Some(v) = file_cfg.catalog {
            config.catalog_path = Some(v);
        }
        if let Some(v) = file_cfg.clear_tickets_on_logout {
            config.logout_policy = logout_policy(v);
        }
        if let Some(v) = file_cfg.log_filter {
            config.log_filter = v;
        }
    }

    let lookup = |name: &str| env(name).filter(|value| !value.trim().is_empty());
    if let Some(v) = lookup("BOOKING_ASSETS_DIR") {
        config.assets_dir = PathBuf::from(v);
    }
    if let Some(v) = lookup("BOOKING_CATALOG") {
        config.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("BOOKING_CLEAR_TICKETS_ON_LOGOUT") {
        if let Some(parsed) = parse_flag(&v) {
            config.logout_policy = logout_policy(parsed);
        }
    }
    if let Some(v) = lookup("BOOKING_LOG") {
        config.log_filter = v;
    }

    if let Some(v) = &cli.assets_dir {
        config.assets_dir = v.clone();
    }
    if let Some(v) = &cli.catalog_path {
        config.catalog_path = Some(v.clone());
    }
    if cli.clear_tickets_on_logout {
        config.logout_policy = LogoutPolicy::ClearTickets;
    }

    Ok(config)
}

fn read_config_file(path: &Path) -> anyhow::Result<Option<FileConfig>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to read config file '{}'", path.display())
            })
        }
    };
    let parsed = toml::from_str::<FileConfig>(&raw)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;
    Ok(Some(parsed))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn logout_policy(clear_tickets: bool) -> LogoutPolicy {
    if clear_tickets {
        LogoutPolicy::ClearTickets
    } else {
        LogoutPolicy::PreserveTickets
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
