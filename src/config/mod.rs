#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_location, validate_non_empty_string, validate_positive_number, validate_protocol,
    Validate,
};
use serde::{Deserialize, Serialize};

/// Connection settings for the Marathon API.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarathonConfig {
    /// `host:port` of a Marathon instance.
    pub location: String,
    /// `http` or `https`, case-insensitive.
    pub protocol: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// When false, invalid TLS certificates are accepted.
    pub verify_ssl: bool,
    /// Per-request timeout enforced by the transport. None leaves reqwest's default.
    pub timeout_seconds: Option<u64>,
}

impl Default for MarathonConfig {
    fn default() -> Self {
        Self {
            location: "localhost:8080".to_string(),
            protocol: "http".to_string(),
            username: None,
            password: None,
            verify_ssl: true,
            timeout_seconds: None,
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for MarathonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarathonConfig")
            .field("location", &self.location)
            .field("protocol", &self.protocol)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Validate for MarathonConfig {
    fn validate(&self) -> Result<()> {
        let scheme = validate_protocol("marathon.protocol", &self.protocol)?;
        validate_location("marathon.location", &scheme, &self.location)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("marathon.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsulConfig {
    /// Joins app id segments into a service name.
    pub name_separator: String,
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            name_separator: ".".to_string(),
        }
    }
}

impl Validate for ConsulConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("consul.name_separator", &self.name_separator)
    }
}
