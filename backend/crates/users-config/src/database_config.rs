use crate::{ConfigError, ConfigErrorResult, MONGODB_SCHEMES};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string (required)
    pub uri: String,
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let uri = self.uri.trim();

        if uri.is_empty() {
            return Err(ConfigError::database(
                "database.uri is required (set MONGO_URI)",
            ));
        }

        if !MONGODB_SCHEMES.iter().any(|scheme| uri.starts_with(scheme)) {
            return Err(ConfigError::database(format!(
                "database.uri must start with one of {:?}",
                MONGODB_SCHEMES
            )));
        }

        Ok(())
    }

    /// Connection string with any `user:password@` replaced by `***@`.
    pub fn redacted_uri(&self) -> String {
        let Some(scheme_end) = self.uri.find("://") else {
            return self.uri.clone();
        };

        let rest = &self.uri[scheme_end + 3..];
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());

        match rest[..authority_end].rfind('@') {
            Some(at) => format!("{}://***@{}", &self.uri[..scheme_end], &rest[at + 1..]),
            None => self.uri.clone(),
        }
    }
}
