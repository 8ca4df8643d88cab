//! Configuration loading
//!
//! Layers, lowest precedence first:
//!
//! 1. [`ContainerConfig::default`]
//! 2. one TOML file: the explicit path, otherwise the first of `./wirebox.toml`,
//!    `./wirebox/wirebox.toml` and `<user config dir>/wirebox/wirebox.toml`
//!    that exists
//! 3. environment variables, `WIREBOX_AUTOWIRE=false`,
//!    `WIREBOX_LOGGING__LEVEL=debug`

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{debug, info, warn};
use wirebox_domain::error::Result;

use crate::config::ContainerConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Loads [`ContainerConfig`] from defaults, a TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader using the default file locations and the `WIREBOX` prefix
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching the default locations
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read environment variables starting with `<prefix>_`
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// The explicitly configured file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File the loader reads: the explicit path, else the first default location found
    pub fn source_file(&self) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => Some(path.clone()),
            None => default_locations().into_iter().find(|path| path.is_file()),
        }
    }

    /// All layers merged, not yet extracted
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(ContainerConfig::default()));

        match self.source_file() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "Reading configuration file");
                figment = figment.merge(Toml::file(path));
            }
            Some(path) => {
                warn!(path = %path.display(), "Configuration file not found, using defaults");
            }
            None => {}
        }

        let prefix = format!("{}_", self.env_prefix);
        figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR))
    }

    /// Extract and validate the configuration
    pub fn load(&self) -> Result<ContainerConfig> {
        let config: ContainerConfig = self
            .figment()
            .extract()
            .config_context("Invalid configuration")?;
        parse_log_level(&config.logging.level)?;

        info!(
            autowire = config.autowire,
            default_lifetime = %config.default_lifetime,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Write `config` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &ContainerConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        let rendered =
            toml::to_string_pretty(config).config_context("Cannot render configuration as TOML")?;

        std::fs::write(path, rendered).io_context(format!("Cannot write {}", path.display()))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::with_capacity(3);
    if let Ok(current_dir) = env::current_dir() {
        locations.push(current_dir.join(DEFAULT_CONFIG_FILENAME));
        locations.push(current_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
    }
    locations
}
