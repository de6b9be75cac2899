//! Typed wrapper for the `sui_getRawObject` method.

use client_rpc_core::RpcProvider;
use serde_json::Value;

use crate::types::RawObjectResponse;

/// JSON-RPC method name for raw object reads.
pub const GET_RAW_OBJECT_METHOD: &str = "sui_getRawObject";

/// Fetch an object in its raw BCS form.
///
/// Issues exactly one `sui_getRawObject` call with `object_id` as the sole
/// parameter. The ID is not validated locally, the payload is not decoded,
/// and any provider failure is returned as-is.
pub async fn get_raw_object<P: RpcProvider>(
    provider: &P,
    object_id: &str,
) -> Result<RawObjectResponse, P::Error> {
    provider
        .call(
            GET_RAW_OBJECT_METHOD,
            vec![Value::String(object_id.to_string())],
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_rpc_core::{MockProvider, ProviderError, RecordedCall};
    use serde_json::json;

    #[tokio::test]
    async fn test_parameter_shaping() {
        let provider = MockProvider::new().with_response(
            GET_RAW_OBJECT_METHOD,
            json!({"status": "NotExists", "details": "0xABC"}),
        );

        get_raw_object(&provider, "0xABC").await.unwrap();

        assert_eq!(
            provider.calls(),
            vec![RecordedCall {
                method: "sui_getRawObject".to_string(),
                params: vec![json!("0xABC")],
            }]
        );
    }

    #[tokio::test]
    async fn test_error_is_returned_unchanged() {
        let error = ProviderError::Rpc {
            code: -32602,
            message: "Invalid params".to_string(),
            data: Some(json!({"objectId": "not-an-id"})),
        };
        let provider = MockProvider::new().with_error(GET_RAW_OBJECT_METHOD, error.clone());

        let err = get_raw_object(&provider, "not-an-id").await.unwrap_err();

        assert_eq!(err, error);
        assert_eq!(provider.call_count(), 1);
    }
}
