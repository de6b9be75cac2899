//! The provider capability consumed by typed RPC wrappers.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Client-side capability for issuing JSON-RPC calls to a node.
///
/// Implementations own everything below the method name: transport,
/// connection reuse, request ids, and decoding the `result` member into `R`.
/// Wrappers built on top of this trait return `Self::Error` untouched.
#[async_trait]
pub trait RpcProvider: Send + Sync {
    /// Error produced by this provider's call mechanism.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Invoke `method` with positional `params` and decode the result.
    async fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static;
}

#[async_trait]
impl<P: RpcProvider> RpcProvider for &P {
    type Error = P::Error;

    async fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static,
    {
        (**self).call(method, params).await
    }
}

#[async_trait]
impl<P: RpcProvider> RpcProvider for Arc<P> {
    type Error = P::Error;

    async fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static,
    {
        (**self).call(method, params).await
    }
}
