use crate::domain::model::{null_as_default, App, Task};
use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Deserialize)]
struct AppsResponse {
    apps: Vec<App>,
}

// Marathon may answer with an empty or null `app`, or none at all; all decode
// to an empty App instead of an error.
#[derive(Deserialize)]
struct AppResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    app: App,
}

#[derive(Deserialize)]
struct TasksResponse {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct LeaderResponse {
    leader: String,
}

/// Decodes `{"apps": [...]}`.
pub fn parse_apps(body: &[u8]) -> Result<Vec<App>> {
    let response: AppsResponse = serde_json::from_slice(body)?;
    Ok(response.apps)
}

/// Decodes `{"app": {...}}`.
pub fn parse_app(body: &[u8]) -> Result<App> {
    let response: AppResponse = serde_json::from_slice(body)?;
    Ok(response.app)
}

/// Decodes `{"tasks": [...]}`.
pub fn parse_tasks(body: &[u8]) -> Result<Vec<Task>> {
    let response: TasksResponse = serde_json::from_slice(body)?;
    Ok(response.tasks)
}

/// Decodes `{"leader": "host:port"}`.
pub fn parse_leader(body: &[u8]) -> Result<String> {
    let response: LeaderResponse = serde_json::from_slice(body)?;
    Ok(response.leader)
}
