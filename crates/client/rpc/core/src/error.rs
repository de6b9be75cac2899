//! Transport-level error taxonomy shared by provider implementations.

/// Errors a provider can produce while performing a JSON-RPC call.
///
/// Typed wrappers never translate these; callers see exactly what the
/// provider returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("JSON-RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("JSON-RPC response carried neither result nor error")]
    MissingResult,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Deserialization(err.to_string())
    }
}

impl ProviderError {
    /// Whether the node itself rejected the call (as opposed to transport failure).
    pub fn is_rpc(&self) -> bool {
        matches!(self, ProviderError::Rpc { .. })
    }
}
