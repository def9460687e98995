use crate::error::ApiResult;
use crate::models::{BufNr, Client, Method};
use async_trait::async_trait;
use serde_json::Value;

/// Looks up the live language server connections attached to a buffer.
#[async_trait]
pub trait ConnectionResolver: Send + Sync {
    /// Clients attached to `bufnr`, narrowed to `name_filter` when given.
    async fn resolve(&self, bufnr: BufNr, name_filter: Option<&str>) -> ApiResult<Vec<Client>>;
}

/// Sends one request to one connection and waits for its raw result.
#[async_trait]
pub trait RequestTransport: Send + Sync {
    /// Returns the `result` member of the response; `Value::Null` when the
    /// server had nothing to say.
    async fn request(
        &self,
        client: &Client,
        method: Method,
        params: Value,
        bufnr: BufNr,
    ) -> ApiResult<Value>;
}
