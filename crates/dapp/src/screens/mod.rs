//! The two screens of the app.

use dapp_bridge::{BridgeError, BridgeSettings, CallResult, ContractBridge};
use dapp_common::{Notification, Notify};
use dapp_wallets::{SessionManager, WalletProvider};
use std::sync::Arc;

mod message;
mod vault;

pub use message::MessageScreen;
pub use vault::VaultScreen;

/// The session manager and contract bridge shared by a screen's actions.
#[derive(Debug)]
pub struct DappContext<W> {
    pub manager: SessionManager<W>,
    pub bridge: ContractBridge<W>,
}

impl<W: WalletProvider + Clone> DappContext<W> {
    pub fn new(provider: Option<W>, settings: BridgeSettings, notifier: Arc<dyn Notify>) -> Self {
        Self {
            bridge: ContractBridge::new(provider.clone(), settings),
            manager: SessionManager::new(provider, notifier),
        }
    }

    pub fn notifier(&self) -> &Arc<dyn Notify> {
        self.manager.notifier()
    }

    pub(crate) fn success(&self, message: impl Into<String>) {
        self.notifier().notify(Notification::success(message));
    }

    /// Reports a failed `action` to the user and turns it into a [`CallResult`].
    pub(crate) fn failure(&self, action: &str, err: BridgeError) -> CallResult {
        let message = match &err {
            BridgeError::NotConnected => "Please connect your wallet first".to_string(),
            err => format!("{action} failed: {err}"),
        };
        self.notifier().notify(Notification::error(message));
        err.into()
    }
}
