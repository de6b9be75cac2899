//! HTTP JSON-RPC provider.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use client_rpc_core::{JsonRpcRequest, JsonRpcResponse, ProviderError, RpcProvider};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::SuiConfig;

/// JSON-RPC provider speaking HTTP POST to a single full-node endpoint.
///
/// One request per call; no retries or failover. The underlying
/// `reqwest::Client` pools connections, so share one provider (e.g. via
/// `Arc`) rather than building one per call.
#[derive(Debug)]
pub struct HttpProvider {
    /// Full-node RPC endpoint
    rpc_url: String,

    /// HTTP client
    http_client: reqwest::Client,

    /// Next JSON-RPC request id
    next_id: AtomicU64,
}

impl HttpProvider {
    /// Create a provider for the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] if the configuration is invalid or
    /// the HTTP client cannot be built.
    pub fn new(config: &SuiConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            rpc_url: config.rpc_url().to_string(),
            http_client,
            next_id: AtomicU64::new(1),
        })
    }

    /// Get RPC endpoint URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl RpcProvider for HttpProvider {
    type Error = ProviderError;

    async fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, &params);

        tracing::debug!("JSON-RPC request: method={}, id={}, url={}", method, id, self.rpc_url);

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("JSON-RPC {} failed with HTTP status {}", method, status);
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to read response body: {}", e)))?;

        tracing::debug!("JSON-RPC response: id={}, {} bytes", id, body.len());

        let envelope: JsonRpcResponse<R> = serde_json::from_str(&body).map_err(|e| {
            ProviderError::Deserialization(format!("{}. Raw response: {}", e, body))
        })?;

        envelope.into_result()
    }
}
