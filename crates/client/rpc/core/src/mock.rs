//! Mock provider for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProviderError;
use crate::provider::RpcProvider;

/// JSON-RPC "method not found" code, returned for unscripted methods.
const METHOD_NOT_FOUND: i64 = -32601;

/// A call observed by [`MockProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Vec<Value>,
}

/// Mock provider for testing without a node.
///
/// Responses are scripted per method name; every call is recorded in order.
#[derive(Clone, Default)]
pub struct MockProvider {
    responses: Arc<Mutex<HashMap<String, Result<Value, ProviderError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful result for `method`.
    pub fn with_response(self, method: &str, result: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(method.to_string(), Ok(result));
        self
    }

    /// Script a failure for `method`.
    pub fn with_error(self, method: &str, error: ProviderError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(method.to_string(), Err(error));
        self
    }

    /// All calls made so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RpcProvider for MockProvider {
    type Error = ProviderError;

    async fn call<R>(&self, method: &str, params: Vec<Value>) -> Result<R, Self::Error>
    where
        R: DeserializeOwned + Send + 'static,
    {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            params,
        });

        let scripted = self.responses.lock().unwrap().get(method).cloned();
        match scripted {
            Some(Ok(value)) => Ok(serde_json::from_value(value)?),
            Some(Err(err)) => Err(err),
            None => Err(ProviderError::Rpc {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {}", method),
                data: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_provider_scripted_response() {
        let provider = MockProvider::new().with_response("sui_getChainIdentifier", json!("4c78adac"));

        let chain_id: String = provider
            .call("sui_getChainIdentifier", vec![])
            .await
            .unwrap();

        assert_eq!(chain_id, "4c78adac");
        assert_eq!(
            provider.calls(),
            vec![RecordedCall {
                method: "sui_getChainIdentifier".to_string(),
                params: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn test_mock_provider_unscripted_method() {
        let provider = MockProvider::new();

        let err = provider
            .call::<Value>("sui_unknown", vec![json!(1)])
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Rpc { code: METHOD_NOT_FOUND, .. }));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_shape_mismatch() {
        let provider = MockProvider::new().with_response("sui_getChainIdentifier", json!(42));

        let err = provider
            .call::<String>("sui_getChainIdentifier", vec![])
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_shared_provider_records_through_arc() {
        let provider = Arc::new(MockProvider::new().with_response("m", json!(true)));

        let ok: bool = (&provider).call("m", vec![]).await.unwrap();
        assert!(ok);
        assert_eq!(provider.call_count(), 1);
    }
}
