use crate::domain::model::{App, AppId, Task};
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// Status and raw body of a single HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network layer behind the Marathon client. Implementations perform exactly
/// one GET per call.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> impl std::future::Future<Output = Result<HttpResponse>> + Send;
}

#[async_trait]
pub trait Marathoner: Send + Sync {
    async fn consul_apps(&self) -> Result<Vec<App>>;
    async fn app(&self, id: &AppId) -> Result<App>;
    async fn tasks(&self, app_id: &AppId) -> Result<Vec<Task>>;
    async fn leader(&self) -> Result<String>;
}
