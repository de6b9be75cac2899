//! Response types for raw object reads.
//!
//! # Pass-through guarantee
//!
//! These types mirror the node's JSON exactly. Fields the node sends but we
//! do not model are kept in `extra` maps via `#[serde(flatten)]`, so that
//! re-serializing a response yields the value it was parsed from. An explicit
//! `"details": null` is kept apart from an absent `details` for the same reason.
//!
//! `bcs_bytes` is never decoded here. Callers decode it into their own
//! structure and pair it with the reference through [`ObjectData`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Lifecycle state of a queried object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectStatus {
    Exists,
    NotExists,
    Deleted,
}

/// Reference to a specific object state, usable as a transaction input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiObjectRef {
    /// Hex-encoded object ID
    pub object_id: String,

    /// Object version (sequence number)
    pub version: u64,

    /// Base58-encoded content digest
    pub digest: String,

    /// Catch-all for unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Object ownership descriptor.
///
/// Wire forms: `{"AddressOwner": "0x.."}`, `{"ObjectOwner": "0x.."}`,
/// `{"Shared": {"initial_shared_version": n}}` and `"Immutable"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectOwner {
    /// Owned by an account address
    AddressOwner(String),
    /// Owned by another object
    ObjectOwner(String),
    /// Shared object, accessible to everyone
    Shared { initial_shared_version: u64 },
    /// Frozen, read-only object
    Immutable,
}

/// Raw object payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObjectData {
    /// Encoded BCS representation of the object (opaque)
    pub bcs_bytes: String,

    /// Catch-all for unmodelled fields (dataType, type, version, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Details of an existing object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObjectDetails {
    pub reference: SuiObjectRef,
    pub owner: ObjectOwner,
    pub data: RawObjectData,

    /// Catch-all for unmodelled fields (previousTransaction, storageRebate, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawObjectDetails {
    /// Pair this object's reference with a payload the caller already decoded.
    pub fn with_data<T>(&self, data: T) -> ObjectData<T> {
        ObjectData::new(self.reference.clone(), data)
    }
}

/// Status-dependent `details` payload.
///
/// The node sends the full object for `Exists`, the last reference for
/// `Deleted`, and echoes the queried ID for `NotExists`. `Null` is an
/// explicit `"details": null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectDetails {
    Object(RawObjectDetails),
    Deleted(SuiObjectRef),
    Missing(String),
    Null,
}

/// Outcome of a `sui_getRawObject` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObjectResponse {
    pub status: ObjectStatus,

    /// `None` only when the key is absent on the wire
    #[serde(
        default,
        deserialize_with = "present_details",
        skip_serializing_if = "Option::is_none"
    )]
    pub details: Option<ObjectDetails>,

    /// Catch-all for unmodelled top-level fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present_details<'de, D>(deserializer: D) -> Result<Option<ObjectDetails>, D::Error>
where
    D: Deserializer<'de>,
{
    ObjectDetails::deserialize(deserializer).map(Some)
}

impl RawObjectResponse {
    /// Whether the node reported the object as existing.
    pub fn exists(&self) -> bool {
        self.status == ObjectStatus::Exists
    }

    /// Object details, present only when the object exists.
    pub fn object(&self) -> Option<&RawObjectDetails> {
        match (&self.status, &self.details) {
            (ObjectStatus::Exists, Some(ObjectDetails::Object(details))) => Some(details),
            _ => None,
        }
    }

    /// Owned variant of [`Self::object`].
    pub fn into_object(self) -> Option<RawObjectDetails> {
        match (self.status, self.details) {
            (ObjectStatus::Exists, Some(ObjectDetails::Object(details))) => Some(details),
            _ => None,
        }
    }

    /// Latest known reference: the live one, or the last one before deletion.
    pub fn reference(&self) -> Option<&SuiObjectRef> {
        match (&self.status, &self.details) {
            (ObjectStatus::Exists, Some(ObjectDetails::Object(details))) => {
                Some(&details.reference)
            }
            (ObjectStatus::Deleted, Some(ObjectDetails::Deleted(reference))) => Some(reference),
            _ => None,
        }
    }
}

/// Object data fetching result.
///
/// Contains both the reference to use in transactions and the decoded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectData<T> {
    pub reference: SuiObjectRef,
    pub data: T,
}

impl<T> ObjectData<T> {
    pub fn new(reference: SuiObjectRef, data: T) -> Self {
        Self { reference, data }
    }
}
