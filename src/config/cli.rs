use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "marathon-consul")]
#[command(about = "Inspect Marathon apps and the Consul services their tasks map to")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file; flags override its values")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Marathon host:port")]
    pub marathon_location: Option<String>,

    #[arg(long, help = "http or https")]
    pub marathon_protocol: Option<String>,

    #[arg(long)]
    pub marathon_username: Option<String>,

    #[arg(long)]
    pub marathon_password: Option<String>,

    #[arg(long, help = "Verify Marathon's TLS certificate (true/false)")]
    pub marathon_ssl_verify: Option<bool>,

    #[arg(long, help = "Request timeout in seconds")]
    pub marathon_timeout: Option<u64>,

    #[arg(long, help = "Separator used when building service names from app ids")]
    pub consul_name_separator: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the current Marathon leader
    Leader,
    /// List apps labelled for Consul registration
    Apps,
    /// Print the registration intent of every task of every Consul app
    Intents {
        #[arg(long, help = "Skip tasks whose health checks are not all passing")]
        healthy_only: bool,
    },
}

impl CliConfig {
    /// Loads the config file, if any, and applies command line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let marathon = &mut config.marathon;
        if let Some(location) = &self.marathon_location {
            marathon.location = location.clone();
        }
        if let Some(protocol) = &self.marathon_protocol {
            marathon.protocol = protocol.clone();
        }
        if self.marathon_username.is_some() {
            marathon.username = self.marathon_username.clone();
        }
        if self.marathon_password.is_some() {
            marathon.password = self.marathon_password.clone();
        }
        if let Some(verify) = self.marathon_ssl_verify {
            marathon.verify_ssl = verify;
        }
        if self.marathon_timeout.is_some() {
            marathon.timeout_seconds = self.marathon_timeout;
        }
        if let Some(separator) = &self.consul_name_separator {
            config.consul.name_separator = separator.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "marathon-consul",
            "--marathon-location",
            "10.0.0.1:8080",
            "--marathon-protocol",
            "HTTPS",
            "--marathon-ssl-verify",
            "false",
            "--consul-name-separator",
            "-",
            "intents",
            "--healthy-only",
        ]);

        let config = cli.resolve().unwrap();

        assert_eq!(config.marathon.location, "10.0.0.1:8080");
        assert_eq!(config.marathon.protocol, "HTTPS");
        assert!(!config.marathon.verify_ssl);
        assert_eq!(config.consul.name_separator, "-");
        assert!(matches!(cli.command, Command::Intents { healthy_only: true }));
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[marathon]\nlocation = \"from-file:8080\"\nusername = \"peter\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "marathon-consul",
            "--config",
            path.as_str(),
            "--marathon-location",
            "from-flag:8080",
            "leader",
        ]);

        let config = cli.resolve().unwrap();

        assert_eq!(config.marathon.location, "from-flag:8080");
        assert_eq!(config.marathon.username.as_deref(), Some("peter"));
    }
}
