use clap::Parser;
use dapp_bridge::BridgeSettings;
use dapp_config::{
    Config, WalletKind,
    figment::{
        self, Metadata, Profile, Provider,
        providers::Serialized,
        value::{Dict, Map},
    },
};
use eyre::Result;
use serde::Serialize;
use std::str::FromStr;

/// Settings that can be overridden from the command line.
///
/// Unset flags leave the value from `dapp.toml` and the environment in place.
#[derive(Clone, Debug, Default, Serialize, Parser)]
#[command(next_help_heading = "Connection options")]
pub struct ConfigOpts {
    /// The JSON-RPC endpoint used for reads and receipts.
    #[arg(long, short, value_name = "URL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,

    /// Where the wallet comes from: `rpc`, `browser` or `none`.
    #[arg(long, value_parser = WalletKind::from_str, value_name = "KIND")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletKind>,

    /// Port of the local browser wallet bridge.
    #[arg(long, value_name = "PORT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_port: Option<u16>,

    /// Number of confirmations to wait for after a transaction is included.
    #[arg(long, value_name = "N")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,

    /// Seconds to wait for a transaction receipt.
    #[arg(long, value_name = "SECONDS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_timeout: Option<u64>,
}

impl ConfigOpts {
    /// Loads the config with these flags merged on top.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::try_from(Config::figment().merge(self))?)
    }
}

impl Provider for ConfigOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("command line arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}

/// The bridge settings selected by `config`.
pub fn bridge_settings(config: &Config) -> BridgeSettings {
    BridgeSettings {
        confirmations: config.confirmations,
        transaction_timeout: Some(config.transaction_timeout()),
        decimals: config.decimals,
    }
}
