use clap::Parser;

use crate::tx;

pub const DEFAULT_NETWORK: &str = "testnet";

/// Resolve a network name to its public fullnode endpoint
pub fn fullnode_url(network: &str) -> Option<String> {
    match network {
        "mainnet" | "testnet" | "devnet" => {
            Some(format!("https://fullnode.{}.sui.io:443", network))
        }
        "localnet" => Some("http://127.0.0.1:9000".to_string()),
        _ => None,
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "movecall")]
#[command(about = "Sign and submit one Move call on Sui, then print the execution result")]
#[command(version)]
pub struct CliArgs {
    /// Network to submit to: mainnet, testnet, devnet, localnet
    /// (defaults to testnet; mutually exclusive with --rpc-url)
    #[arg(long, value_name = "NETWORK")]
    pub network: Option<String>,

    /// Explicit fullnode JSON-RPC endpoint (mutually exclusive with --network)
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Move call target as package::module::function
    #[arg(long, default_value = tx::DEFAULT_TARGET, value_name = "TARGET")]
    pub target: String,

    /// Arguments for the call (object ids or pure values), in order
    #[arg(long, value_name = "ARG", num_args = 0..)]
    pub args: Vec<String>,

    /// Gas budget in MIST
    #[arg(long, default_value_t = tx::DEFAULT_GAS_BUDGET, value_name = "MIST")]
    pub gas_budget: u64,

    /// Disable ANSI colors in the report
    #[arg(long)]
    pub no_color: bool,

    /// Build and sign the transaction but do not execute it
    #[arg(long)]
    pub dry_run: bool,

    /// Environment variable holding the private key
    #[arg(long, default_value = "PRIVATE_KEY", value_name = "VAR")]
    pub key_env: String,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.network.is_some() && self.rpc_url.is_some() {
            return Err("Cannot specify both --network and --rpc-url".to_string());
        }

        if self.rpc_url.is_none() {
            let network = self.network.as_deref().unwrap_or(DEFAULT_NETWORK);
            if fullnode_url(network).is_none() {
                return Err(format!(
                    "Unknown network '{}'. Use mainnet, testnet, devnet, localnet, or --rpc-url",
                    network
                ));
            }
        }

        if self.gas_budget == 0 {
            return Err("--gas-budget must be greater than zero".to_string());
        }

        // Surface target parse errors before touching the network
        tx::MoveCallRequest::from_target(&self.target, &self.args, self.gas_budget)?;

        Ok(())
    }

    /// The endpoint to submit to
    pub fn endpoint(&self) -> String {
        match &self.rpc_url {
            Some(url) => url.clone(),
            None => {
                fullnode_url(self.network.as_deref().unwrap_or(DEFAULT_NETWORK))
                    .unwrap_or_default()
            }
        }
    }
}
