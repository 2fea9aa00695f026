use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Label key that marks an app for registration and carries name/tag overrides.
pub const CONSUL_LABEL_KEY: &str = "consul";

/// Label maps keep the order in which Marathon sent the keys.
pub type Labels = IndexMap<String, String>;

/// Marathon sends `null` for unset members; treat it like an absent one.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct App {
    #[serde(deserialize_with = "null_as_default")]
    pub id: AppId,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Labels,
    #[serde(deserialize_with = "null_as_default")]
    pub health_checks: Vec<HealthCheck>,
    #[serde(deserialize_with = "null_as_default")]
    pub port_definitions: Vec<PortDefinition>,
    #[serde(deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthCheck {
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port_index: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub grace_period_seconds: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub interval_seconds: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub timeout_seconds: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_consecutive_failures: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortDefinition {
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Labels,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "null_as_default")]
    pub id: TaskId,
    #[serde(deserialize_with = "null_as_default")]
    pub app_id: AppId,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ports: Vec<u16>,
    #[serde(deserialize_with = "null_as_default")]
    pub health_check_results: Vec<HealthCheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staged_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthCheckResult {
    #[serde(deserialize_with = "null_as_default")]
    pub alive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationIntent {
    pub name: String,
    pub port: u16,
    pub tags: Vec<String>,
}

impl App {
    /// An app is eligible for registration when it carries the `consul` label,
    /// whatever its value.
    pub fn is_consul_app(&self) -> bool {
        self.labels.contains_key(CONSUL_LABEL_KEY)
    }

    /// Tasks that have at least one port bound and can therefore be registered.
    pub fn tasks_for_registration(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.ports.is_empty())
    }
}

impl Task {
    /// Healthy means at least one health check result, all of them alive.
    pub fn is_healthy(&self) -> bool {
        !self.health_check_results.is_empty()
            && self.health_check_results.iter().all(|result| result.alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> Labels {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_consul_app() {
        let app = App {
            labels: labels(&[("consul", "true")]),
            ..Default::default()
        };
        assert!(app.is_consul_app());

        let app = App {
            labels: labels(&[("consul", "someName"), ("marathon", "true")]),
            ..Default::default()
        };
        assert!(app.is_consul_app());

        let app = App {
            labels: labels(&[("consul", "")]),
            ..Default::default()
        };
        assert!(app.is_consul_app());

        let app = App::default();
        assert!(!app.is_consul_app());
    }

    #[test]
    fn test_ids_display() {
        assert_eq!(AppId::from("appId").to_string(), "appId");
        assert_eq!(TaskId::new("task.1").as_str(), "task.1");
    }

    #[test]
    fn test_task_health() {
        let mut task = Task::default();
        assert!(!task.is_healthy());

        task.health_check_results = vec![HealthCheckResult { alive: true }];
        assert!(task.is_healthy());

        task.health_check_results.push(HealthCheckResult { alive: false });
        assert!(!task.is_healthy());
    }

    #[test]
    fn test_tasks_for_registration_skips_portless_tasks() {
        let app = App {
            tasks: vec![
                Task {
                    id: TaskId::new("with-port"),
                    ports: vec![31000],
                    ..Default::default()
                },
                Task {
                    id: TaskId::new("without-port"),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let ids: Vec<&str> = app.tasks_for_registration().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["with-port"]);
    }

    #[test]
    fn test_null_members_decode_as_defaults() {
        let task: Task = serde_json::from_str(
            r#"{"id": "t.1", "appId": null, "host": null, "ports": null,
                "healthCheckResults": [{"alive": null}], "version": null}"#,
        )
        .unwrap();

        assert_eq!(task.id.as_str(), "t.1");
        assert!(task.app_id.as_str().is_empty());
        assert!(task.host.is_empty());
        assert!(task.ports.is_empty());
        assert!(!task.health_check_results[0].alive);
        assert_eq!(task.version, None);
    }

    #[test]
    fn test_labels_keep_wire_order() {
        let app: App =
            serde_json::from_str(r#"{"labels": {"zeta": "tag", "alpha": "tag", "consul": "true"}}"#)
                .unwrap();

        let keys: Vec<&str> = app.labels.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "consul"]);
    }
}
