//! Pass-through behaviour of `get_raw_object` over a scripted provider.

use std::sync::Arc;

use client_rpc_core::{MockProvider, ProviderError};
use client_rpc_sui::{
    GET_RAW_OBJECT_METHOD, ObjectOwner, ObjectStatus, RawObjectResponse, get_raw_object,
};
use serde_json::{Value, json};

fn scenario_object() -> Value {
    json!({
        "status": "Exists",
        "details": {
            "reference": {"objectId": "0x5", "version": 1, "digest": "d"},
            "owner": {"AddressOwner": "0xOWNER"},
            "data": {"bcs_bytes": "QkNT"}
        }
    })
}

#[tokio::test]
async fn test_returns_node_value_unchanged() {
    let provider = MockProvider::new().with_response(GET_RAW_OBJECT_METHOD, scenario_object());

    let response = get_raw_object(&provider, "0x5").await.unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), scenario_object());

    let object = response.object().unwrap();
    assert_eq!(response.status, ObjectStatus::Exists);
    assert_eq!(object.reference.object_id, "0x5");
    assert_eq!(object.reference.digest, "d");
    assert_eq!(object.owner, ObjectOwner::AddressOwner("0xOWNER".to_string()));
    assert_eq!(object.data.bcs_bytes, "QkNT");
}

#[tokio::test]
async fn test_opaque_bcs_bytes_are_not_decoded() {
    let value = json!({
        "status": "Exists",
        "details": {
            "reference": {"objectId": "0xABC", "version": 7, "digest": "x"},
            "owner": "Immutable",
            "data": {"bcs_bytes": "%%% not base64 at all %%%"}
        }
    });
    let provider = MockProvider::new().with_response(GET_RAW_OBJECT_METHOD, value.clone());

    let response = get_raw_object(&provider, "0xABC").await.unwrap();

    assert_eq!(
        response.object().unwrap().data.bcs_bytes,
        "%%% not base64 at all %%%"
    );
    assert_eq!(serde_json::to_value(&response).unwrap(), value);
}

#[tokio::test]
async fn test_provider_error_propagates() {
    let provider = MockProvider::new().with_error(
        GET_RAW_OBJECT_METHOD,
        ProviderError::Network("connection refused".to_string()),
    );

    let err = get_raw_object(&provider, "0xABC").await.unwrap_err();

    assert_eq!(err, ProviderError::Network("connection refused".to_string()));
}

#[tokio::test]
async fn test_malformed_response_surfaces_as_provider_error() {
    let provider =
        MockProvider::new().with_response(GET_RAW_OBJECT_METHOD, json!({"status": "Vanished"}));

    let err = get_raw_object(&provider, "0xABC").await.unwrap_err();

    assert!(matches!(err, ProviderError::Deserialization(_)));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let provider = Arc::new(
        MockProvider::new().with_response(GET_RAW_OBJECT_METHOD, scenario_object()),
    );

    let (a, b) = tokio::join!(
        get_raw_object(&provider, "0x5"),
        get_raw_object(&provider, "0x5")
    );

    let a: RawObjectResponse = a.unwrap();
    assert_eq!(a, b.unwrap());
    assert_eq!(provider.call_count(), 2);
}
