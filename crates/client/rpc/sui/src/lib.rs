//! Sui full-node JSON-RPC integration.
//!
//! This crate fills in typed access to node methods that are not exposed by
//! higher-level SDK clients, starting with `sui_getRawObject`:
//! - Response types for raw (BCS-encoded) object reads
//! - A typed wrapper over any [`RpcProvider`]
//! - An HTTP JSON-RPC provider configured per network
//!
//! # Architecture
//!
//! ```text
//! get_raw_object(provider, id) → RpcProvider::call("sui_getRawObject", [id])
//!                                        ↓
//!                                 HttpProvider (reqwest) → full node
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use client_rpc_sui::{HttpProvider, SuiConfig, get_raw_object};
//!
//! let provider = HttpProvider::new(&SuiConfig::from_env()?)?;
//! let response = get_raw_object(&provider, "0x5").await?;
//!
//! if let Some(object) = response.object() {
//!     println!("{} bytes of BCS", object.data.bcs_bytes.len());
//! }
//! ```

pub mod config;
pub mod http;
pub mod raw_object;
pub mod types;

pub use client_rpc_core::{ProviderError, RpcProvider};
pub use config::{ConfigError, SuiConfig, SuiNetwork};
pub use http::HttpProvider;
pub use raw_object::{GET_RAW_OBJECT_METHOD, get_raw_object};
pub use types::{
    ObjectData, ObjectDetails, ObjectOwner, ObjectStatus, RawObjectData, RawObjectDetails,
    RawObjectResponse, SuiObjectRef,
};
