//! Command-line arguments.

use clap::Parser;
use client_rpc_sui::SuiNetwork;

/// Fetch a Sui object in raw (BCS) form
#[derive(Parser)]
#[command(name = "raw-object")]
#[command(about = "Fetch a Sui object via sui_getRawObject", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Object ID to fetch (e.g., 0x5)
    #[arg(value_name = "OBJECT_ID")]
    pub object_id: String,

    /// Network to query (overrides SUI_NETWORK)
    #[arg(short, long, value_enum)]
    pub network: Option<NetworkArg>,

    /// Custom RPC endpoint (overrides SUI_RPC_URL and the network default)
    #[arg(short, long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Request timeout in seconds (overrides SUI_RPC_TIMEOUT_SECS)
    #[arg(short, long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum NetworkArg {
    Mainnet,
    Testnet,
    Devnet,
    Local,
}

impl From<NetworkArg> for SuiNetwork {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Mainnet => SuiNetwork::Mainnet,
            NetworkArg::Testnet => SuiNetwork::Testnet,
            NetworkArg::Devnet => SuiNetwork::Devnet,
            NetworkArg::Local => SuiNetwork::Local,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Status, reference, owner and payload size
    Summary,
    /// Full JSON response as returned by the node
    Json,
}
