use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {section} setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Environment variable {var}={value:?} is not valid: {reason} {location}")]
    Env {
        var: &'static str,
        value: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Config directory or file location problem
    #[track_caller]
    pub fn location<S: Into<String>>(message: S) -> Self {
        Self::invalid("config location", message)
    }

    /// `[database]` section, i.e. the MongoDB URI
    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::invalid("database", message)
    }

    /// `[server]` section, the HTTP listener
    #[track_caller]
    pub fn listener<S: Into<String>>(message: S) -> Self {
        Self::invalid("server", message)
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::invalid("logging", message)
    }

    #[track_caller]
    pub fn env(var: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        ConfigError::Env {
            var,
            value: value.into(),
            reason: reason.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
