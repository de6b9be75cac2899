//! JSON-RPC provider abstraction for blockchain node clients.
//!
//! This crate defines the capability every node client is written against:
//! issue one named JSON-RPC call and decode its result.
//!
//! # Architecture
//!
//! ```text
//! Chain layer:  typed method wrappers (client-rpc-sui)
//!                         ↓
//! Capability:   RpcProvider::call(method, params)
//!                         ↓
//! Transport:    HTTP, mock, ... (implementations)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use client_rpc_core::RpcProvider;
//!
//! async fn chain_id<P: RpcProvider>(provider: &P) -> Result<String, P::Error> {
//!     provider.call("sui_getChainIdentifier", vec![]).await
//! }
//! ```

pub mod envelope;
pub mod error;
pub mod provider;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use envelope::{JSONRPC_VERSION, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use error::ProviderError;
pub use provider::RpcProvider;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockProvider, RecordedCall};
