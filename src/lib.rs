pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{toml_config::TomlConfig, ConsulConfig, MarathonConfig};

pub use crate::core::{marathon::Marathon, transport::ReqwestTransport};
pub use domain::model::{
    App, AppId, HealthCheck, HealthCheckResult, PortDefinition, RegistrationIntent, Task, TaskId,
    CONSUL_LABEL_KEY,
};
pub use domain::ports::{HttpResponse, Marathoner, Transport};
pub use utils::error::{MarathonError, Result};
