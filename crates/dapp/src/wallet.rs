use dapp_common::{Notification, Notify};
use dapp_config::{Config, WalletKind};
use dapp_wallets::{BrowserWallet, BrowserWalletServer, RpcWallet, WalletProvider};
use eyre::{Result, WrapErr};
use std::sync::Arc;

use crate::{DappContext, opts::bridge_settings};

/// The wallet registered for a run, if any.
pub type DynWallet = Arc<dyn WalletProvider>;

/// Registers the wallet selected by `config.wallet`.
///
/// Returns `None` for [`WalletKind::None`], which the session manager reports as a missing
/// provider.
pub async fn connect(config: &Config, notifier: &dyn Notify) -> Result<Option<DynWallet>> {
    let wallet: DynWallet = match config.wallet {
        WalletKind::None => return Ok(None),
        WalletKind::Rpc => Arc::new(reader(config).await?),
        WalletKind::Browser => {
            let reader = reader(config).await?;
            let mut server = BrowserWalletServer::new(config.browser_port, config.browser_timeout());
            server.start().await.wrap_err_with(|| {
                format!("failed to start the browser bridge on port {}", config.browser_port)
            })?;
            notifier.notify(Notification::info(format!(
                "Open {} in the browser that has your wallet installed",
                server.url()
            )));
            Arc::new(BrowserWallet::new(server, reader))
        }
    };
    debug!(wallet = %config.wallet, "registered wallet provider");
    Ok(Some(wallet))
}

async fn reader(config: &Config) -> Result<RpcWallet> {
    RpcWallet::connect(&config.rpc_url)
        .await
        .wrap_err_with(|| format!("failed to connect to {}", config.rpc_url))
}

/// Builds the screen context for `config`, registering its wallet.
pub async fn context(
    config: &Config,
    notifier: Arc<dyn Notify>,
) -> Result<DappContext<DynWallet>> {
    let wallet = connect(config, notifier.as_ref()).await?;
    Ok(DappContext::new(wallet, bridge_settings(config), notifier))
}
