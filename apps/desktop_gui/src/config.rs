//! Startup configuration: defaults, then TOML file, then environment, then CLI flags.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const ENV_LOG: &str = "LITTLE_LEMON_LOG";
pub const ENV_FETCH_IMAGES: &str = "LITTLE_LEMON_FETCH_IMAGES";
pub const ENV_IMAGE_TIMEOUT_SECS: &str = "LITTLE_LEMON_IMAGE_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub log_filter: String,
    pub window_title: String,
    pub fetch_images: bool,
    pub image_timeout_secs: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            window_title: shared::catalog::BRAND_NAME.to_string(),
            fetch_images: true,
            image_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    log_filter: Option<String>,
    window_title: Option<String>,
    fetch_images: Option<bool>,
    image_timeout_secs: Option<u64>,
}

impl StartupConfig {
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("little_lemon").join("desktop_gui.toml"))
    }

    /// Builds the config from defaults, the config file and process environment.
    ///
    /// An explicit path must exist; the per-user default path is optional. Ignored values
    /// are described in `notes` so they can be logged once tracing is up.
    pub fn load(explicit: Option<&Path>, notes: &mut Vec<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path().filter(|path| path.exists()),
        };
        if let Some(path) = path {
            let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            config.apply_toml(&raw, &path, notes)?;
        }

        config.apply_env_with(|name| std::env::var(name).ok(), notes);
        Ok(config)
    }

    fn apply_toml(
        &mut self,
        raw: &str,
        path: &Path,
        notes: &mut Vec<String>,
    ) -> Result<(), ConfigError> {
        let file: FileConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file.window_title {
            self.window_title = v;
        }
        if let Some(v) = file.fetch_images {
            self.fetch_images = v;
        }
        match file.image_timeout_secs {
            Some(0) => notes.push(format!(
                "{}: image_timeout_secs = 0 is not a positive integer; ignored",
                path.display()
            )),
            Some(v) => self.image_timeout_secs = v,
            None => {}
        }
        Ok(())
    }

    fn apply_env_with(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
        notes: &mut Vec<String>,
    ) {
        if let Some(v) = read_non_empty(&lookup, ENV_LOG) {
            self.log_filter = v;
        }

        if let Some(v) = read_non_empty(&lookup, ENV_FETCH_IMAGES) {
            match parse_flag(&v) {
                Some(flag) => self.fetch_images = flag,
                None => notes.push(format!("{ENV_FETCH_IMAGES}={v:?} is not a boolean; ignored")),
            }
        }

        if let Some(v) = read_non_empty(&lookup, ENV_IMAGE_TIMEOUT_SECS) {
            match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.image_timeout_secs = secs,
                _ => notes.push(format!(
                    "{ENV_IMAGE_TIMEOUT_SECS}={v:?} is not a positive integer; ignored"
                )),
            }
        }
    }

    pub fn apply_args(&mut self, log: Option<String>, no_images: bool) {
        if let Some(filter) = log {
            self.log_filter = filter;
        }
        if no_images {
            self.fetch_images = false;
        }
    }
}

fn read_non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
