//! Sui node connection configuration.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SUI_NETWORK: {0}. Must be mainnet, testnet, devnet, or local")]
    InvalidNetwork(String),

    #[error("Invalid RPC URL format: {0}")]
    InvalidUrl(String),

    #[error("Invalid SUI_RPC_TIMEOUT_SECS: {0}. Must be a whole number of seconds")]
    InvalidTimeout(String),

    #[error("Request timeout must be greater than 0")]
    ZeroTimeout,
}

/// Sui network types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuiNetwork {
    /// Sui mainnet
    Mainnet,
    /// Sui testnet
    #[default]
    Testnet,
    /// Sui devnet
    Devnet,
    /// Local Sui network
    Local,
}

impl SuiNetwork {
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            SuiNetwork::Mainnet => "https://fullnode.mainnet.sui.io:443",
            SuiNetwork::Testnet => "https://fullnode.testnet.sui.io:443",
            SuiNetwork::Devnet => "https://fullnode.devnet.sui.io:443",
            SuiNetwork::Local => "http://127.0.0.1:9000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuiNetwork::Mainnet => "mainnet",
            SuiNetwork::Testnet => "testnet",
            SuiNetwork::Devnet => "devnet",
            SuiNetwork::Local => "local",
        }
    }
}

impl fmt::Display for SuiNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuiNetwork {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(SuiNetwork::Mainnet),
            "testnet" => Ok(SuiNetwork::Testnet),
            "devnet" => Ok(SuiNetwork::Devnet),
            "local" => Ok(SuiNetwork::Local),
            other => Err(ConfigError::InvalidNetwork(other.to_string())),
        }
    }
}

/// Node connection configuration.
#[derive(Debug, Clone)]
pub struct SuiConfig {
    /// Sui network to connect to
    pub network: SuiNetwork,

    /// Custom RPC endpoint URL (overrides network default)
    pub rpc_url: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl SuiConfig {
    /// Create a new configuration for `network` with default settings.
    pub fn new(network: SuiNetwork) -> Self {
        Self {
            network,
            rpc_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SUI_NETWORK` - Network name (mainnet, testnet, devnet, local) (default: testnet)
    /// - `SUI_RPC_URL` - Custom RPC endpoint URL
    /// - `SUI_RPC_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup("SUI_NETWORK") {
            Some(name) => name.parse()?,
            None => SuiNetwork::default(),
        };

        let rpc_url = lookup("SUI_RPC_URL").filter(|url| !url.is_empty());

        let timeout_secs = match lookup("SUI_RPC_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            network,
            rpc_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Set custom RPC URL.
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = Some(url.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the RPC URL (custom or default for network).
    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.rpc_url();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

impl Default for SuiConfig {
    fn default() -> Self {
        Self::new(SuiNetwork::Testnet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SuiConfig::default();
        assert_eq!(config.network, SuiNetwork::Testnet);
        assert_eq!(config.rpc_url(), "https://fullnode.testnet.sui.io:443");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = SuiConfig::from_lookup(lookup_from(&[
            ("SUI_NETWORK", "Mainnet"),
            ("SUI_RPC_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.network, SuiNetwork::Mainnet);
        assert_eq!(config.rpc_url(), "https://fullnode.mainnet.sui.io:443");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_custom_url_overrides_network() {
        let config = SuiConfig::from_lookup(lookup_from(&[
            ("SUI_NETWORK", "local"),
            ("SUI_RPC_URL", "http://10.0.0.2:9000"),
        ]))
        .unwrap();

        assert_eq!(config.rpc_url(), "http://10.0.0.2:9000");
    }

    #[test]
    fn test_invalid_network() {
        let err = SuiConfig::from_lookup(lookup_from(&[("SUI_NETWORK", "moonnet")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidNetwork("moonnet".to_string()));
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["abc", "-5", "1.5", ""] {
            let err = SuiConfig::from_lookup(lookup_from(&[("SUI_RPC_TIMEOUT_SECS", raw)]))
                .unwrap_err();
            assert_eq!(err, ConfigError::InvalidTimeout(raw.to_string()));
        }

        let padded =
            SuiConfig::from_lookup(lookup_from(&[("SUI_RPC_TIMEOUT_SECS", " 12 ")])).unwrap();
        assert_eq!(padded.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_validation() {
        let bad_url = SuiConfig::default().with_rpc_url("fullnode.sui.io");
        assert!(matches!(bad_url.validate(), Err(ConfigError::InvalidUrl(_))));

        let zero_timeout = SuiConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(zero_timeout.validate(), Err(ConfigError::ZeroTimeout));
    }
}
