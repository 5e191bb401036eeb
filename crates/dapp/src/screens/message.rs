use dapp_bridge::{BridgeError, CallResult};
use dapp_wallets::WalletProvider;

use super::DappContext;
use crate::AppState;

/// Reads and replaces the message stored on the board.
///
/// Every action asks for wallet access first, also the read.
#[derive(Debug)]
pub struct MessageScreen<W> {
    ctx: DappContext<W>,
    state: AppState,
}

impl<W: WalletProvider + Clone> MessageScreen<W> {
    pub fn new(ctx: DappContext<W>) -> Self {
        Self { ctx, state: AppState::new() }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn context(&self) -> &DappContext<W> {
        &self.ctx
    }

    pub async fn connect_wallet(&mut self) -> bool {
        self.ctx.manager.ensure_connected(&mut self.state.session).await
    }

    /// Reads the stored message into the state.
    pub async fn get_message(&mut self) -> CallResult {
        if !self.connect_wallet().await {
            return BridgeError::NotConnected.into();
        }
        match self.ctx.bridge.get_message(&self.state.session).await {
            Ok(message) => {
                debug!(%message, "retrieved message");
                self.state.message = Some(message.clone());
                CallResult::Value(message)
            }
            Err(err) => self.ctx.failure("Reading the message", err),
        }
    }

    /// Stores `message` on the board.
    pub async fn set_message(&mut self, message: &str) -> CallResult {
        if !self.connect_wallet().await {
            return BridgeError::NotConnected.into();
        }
        match self.ctx.bridge.set_message(&self.state.session, message).await {
            Ok(receipt) => {
                self.ctx.success(format!("Message updated in {}", receipt.transaction_hash));
                CallResult::Receipt(Box::new(receipt))
            }
            Err(err) => self.ctx.failure("Setting the message", err),
        }
    }
}
