//! JSON-RPC 2.0 request/response envelopes.
//!
//! Node responses are decoded leniently: `id` may be null on some error
//! responses, and `result`/`error` are both optional on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

/// Protocol version string sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing JSON-RPC request.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a [Value],
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Error object returned by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<JsonRpcError> for ProviderError {
    fn from(err: JsonRpcError) -> Self {
        ProviderError::Rpc {
            code: err.code,
            message: err.message,
            data: err.data,
        }
    }
}

/// Incoming JSON-RPC response carrying a result of type `R`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse<R> {
    #[serde(default)]
    pub jsonrpc: String,

    #[serde(default)]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<R>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl<R> JsonRpcResponse<R> {
    /// Unwrap the envelope. A node-side `error` wins over any `result`.
    pub fn into_result(self) -> Result<R, ProviderError> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        self.result.ok_or(ProviderError::MissingResult)
    }
}
