use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from all sources.
    ///
    /// Loading order (later wins):
    /// 1. `.env` in the working directory, if present
    /// 2. Built-in defaults
    /// 3. `config.toml` in the config directory, if present
    /// 4. Environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // A missing .env is normal outside development
        let _ = dotenvy::dotenv();

        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: USERS_CONFIG_DIR env var > ./.users/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::location("cannot determine the working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("file must not be empty when set"));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (credentials in the URI are redacted).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!("  database: {}", self.database.redacted_uri());
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("USERS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_port("PORT", &mut self.server.port)?;
        Self::apply_env_port("USERS_SERVER_PORT", &mut self.server.port)?;

        // Database
        Self::apply_env_string("MONGO_URI", &mut self.database.uri);
        Self::apply_env_string("USERS_DATABASE_URI", &mut self.database.uri);

        // Logging
        Self::apply_env_parse("USERS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("USERS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("USERS_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("USERS_LOG_DIR", &mut self.logging.dir);

        Ok(())
    }

    /// Helper: Apply environment variable override for non-empty String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply a port override. Empty is ignored, anything else must parse.
    fn apply_env_port(var_name: &'static str, target: &mut u16) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = val
                .parse()
                .map_err(|e| ConfigError::env(var_name, val.as_str(), e))?;
        }

        Ok(())
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
