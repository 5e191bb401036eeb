//! # dapp-config
//!
//! Layered configuration: built-in defaults, then `dapp.toml`, then environment variables,
//! then whatever the caller merges on top (usually command line flags).

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

mod error;
pub use error::{ConfigError, ExtractConfigError};

pub use figment;

/// Where the wallet capability comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    /// Unlocked accounts of the node at `rpc_url`.
    #[default]
    Rpc,
    /// A browser-injected wallet reached through the local browser bridge.
    Browser,
    /// No wallet is available.
    None,
}

impl WalletKind {
    /// Returns the config value for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rpc => "rpc",
            Self::Browser => "browser",
            Self::None => "none",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rpc" => Ok(Self::Rpc),
            "browser" => Ok(Self::Browser),
            "none" => Ok(Self::None),
            _ => Err(ConfigError::UnknownWallet(s.to_string())),
        }
    }
}

/// Settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON-RPC endpoint used for reads and receipts.
    pub rpc_url: String,
    /// Which wallet capability to register.
    pub wallet: WalletKind,
    /// Port of the local browser bridge, `0` picks a free one.
    pub browser_port: u16,
    /// Seconds to wait for the browser wallet to answer a prompt.
    pub browser_timeout: u64,
    /// Confirmations to wait for before a transaction counts as done.
    pub confirmations: u64,
    /// Seconds to wait for a transaction receipt.
    pub transaction_timeout: u64,
    /// Decimals of the amounts handled by the vault.
    pub decimals: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: Self::DEFAULT_RPC_URL.to_string(),
            wallet: WalletKind::default(),
            browser_port: 9545,
            browser_timeout: 300,
            confirmations: 1,
            transaction_timeout: 120,
            decimals: 18,
        }
    }
}

impl Config {
    /// The default config file name.
    pub const FILE_NAME: &'static str = "dapp.toml";

    /// Local node endpoint.
    pub const DEFAULT_RPC_URL: &'static str = "http://127.0.0.1:8545";

    /// Loads the config from the default [`figment`](Self::figment).
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment())
    }

    /// Returns the default [`Figment`]:
    ///
    /// 1. [`Config::default()`]
    /// 2. `dapp.toml`, or the file named by `DAPP_CONFIG`
    /// 3. `ETH_RPC_URL`
    /// 4. `DAPP_`-prefixed environment variables, e.g. `DAPP_WALLET=browser`
    pub fn figment() -> Figment {
        let file = Env::var_or("DAPP_CONFIG", Self::FILE_NAME);
        Figment::from(Self::default())
            .merge(Toml::file(file))
            .merge(Env::raw().only(&["ETH_RPC_URL"]).map(|_| "rpc_url".into()))
            .merge(Env::prefixed("DAPP_").ignore(&["CONFIG"]))
    }

    /// Attempts to extract a `Config` from `provider`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dapp_config::Config;
    /// use figment::providers::Serialized;
    ///
    /// let figment = Config::figment().merge(Serialized::default("confirmations", 3));
    /// let config = Config::try_from(figment).unwrap();
    /// assert_eq!(config.confirmations, 3);
    /// ```
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        let figment = Figment::from(provider);
        trace!(metadata = ?figment.metadata().collect::<Vec<_>>(), "extracting config");
        figment.extract::<Self>().map_err(ExtractConfigError::new)
    }

    /// How long to wait for the browser wallet.
    pub fn browser_timeout(&self) -> Duration {
        Duration::from_secs(self.browser_timeout)
    }

    /// How long to wait for a transaction receipt.
    pub fn transaction_timeout(&self) -> Duration {
        Duration::from_secs(self.transaction_timeout)
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("dapp default config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_| {
            let config = Config::load().unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.transaction_timeout(), Duration::from_secs(120));
            Ok(())
        });
    }

    #[test]
    fn toml_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                Config::FILE_NAME,
                r#"
                    rpc_url = "http://node.local:8545"
                    wallet = "browser"
                    confirmations = 2
                "#,
            )?;
            let config = Config::load().unwrap();
            assert_eq!(config.rpc_url, "http://node.local:8545");
            assert_eq!(config.wallet, WalletKind::Browser);
            assert_eq!(config.confirmations, 2);

            jail.set_env("ETH_RPC_URL", "http://eth.local:8545");
            assert_eq!(Config::load().unwrap().rpc_url, "http://eth.local:8545");

            jail.set_env("DAPP_RPC_URL", "http://dapp.local:8545");
            jail.set_env("DAPP_WALLET", "none");
            jail.set_env("DAPP_BROWSER_PORT", "0");
            let config = Config::load().unwrap();
            assert_eq!(config.rpc_url, "http://dapp.local:8545");
            assert_eq!(config.wallet, WalletKind::None);
            assert_eq!(config.browser_port, 0);
            Ok(())
        });
    }

    #[test]
    fn custom_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("other.toml", "decimals = 6")?;
            jail.set_env("DAPP_CONFIG", "other.toml");
            assert_eq!(Config::load().unwrap().decimals, 6);
            Ok(())
        });
    }

    #[test]
    fn reports_toml_errors() {
        Jail::expect_with(|jail| {
            jail.create_file(Config::FILE_NAME, r#"confirmations = "many""#)?;
            let err = Config::load().unwrap_err().to_string();
            assert!(err.contains("dapp.toml error"), "{err}");
            assert!(err.contains("confirmations"), "{err}");
            Ok(())
        });
    }

    #[test]
    fn parses_wallet_kind() {
        assert_eq!("Browser".parse::<WalletKind>().unwrap(), WalletKind::Browser);
        assert_eq!(WalletKind::None.to_string(), "none");
        assert!("ledger".parse::<WalletKind>().is_err());
    }
}
