use alloy_primitives::Address;
use dapp_bridge::{BridgeError, CallResult};
use dapp_wallets::{Receipt, WalletProvider};

use super::DappContext;
use crate::AppState;

/// Shows the vault balance of the active account and moves funds in and out.
#[derive(Debug)]
pub struct VaultScreen<W> {
    ctx: DappContext<W>,
    state: AppState,
}

impl<W: WalletProvider + Clone> VaultScreen<W> {
    pub fn new(ctx: DappContext<W>) -> Self {
        Self { ctx, state: AppState::new() }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn context(&self) -> &DappContext<W> {
        &self.ctx
    }

    /// Picks up an existing authorization without prompting and, if there is one, loads the
    /// balance.
    pub async fn init(&mut self) -> bool {
        let connected = self.ctx.manager.check_existing_connection(&mut self.state.session).await;
        if connected {
            self.refresh_balance().await;
        }
        connected
    }

    /// Prompts for wallet access and loads the balance once connected.
    pub async fn connect_wallet(&mut self) -> bool {
        let connected = self.ctx.manager.ensure_connected(&mut self.state.session).await;
        if connected {
            self.refresh_balance().await;
        }
        connected
    }

    pub async fn refresh_balance(&mut self) -> CallResult {
        match self.ctx.bridge.get_balance(&self.state.session).await {
            Ok(balance) => {
                self.state.balance = Some(balance.clone());
                CallResult::Value(balance)
            }
            Err(err) => self.ctx.failure("Loading the balance", err),
        }
    }

    /// Deposits `amount`, a decimal string.
    pub async fn handle_deposit(&mut self, amount: &str) -> CallResult {
        self.sync_accounts().await;
        let result = self.ctx.bridge.deposit(&self.state.session, amount).await;
        self.finish("Deposit", &format!("Deposited {amount}"), result).await
    }

    /// Withdraws `amount`, a decimal string.
    pub async fn handle_withdraw(&mut self, amount: &str) -> CallResult {
        self.sync_accounts().await;
        let result = self.ctx.bridge.withdraw(&self.state.session, amount).await;
        self.finish("Withdrawal", &format!("Withdrew {amount}"), result).await
    }

    /// Applies an account change reported by the wallet.
    pub async fn accounts_changed(&mut self, accounts: &[Address]) {
        let previous = self.state.session.address();
        self.ctx.manager.accounts_changed(&mut self.state.session, accounts);
        match self.state.session.address() {
            None => self.state.balance = None,
            Some(address) if Some(address) != previous => {
                self.refresh_balance().await;
            }
            Some(_) => {}
        }
    }

    /// Catches up with disconnects and account switches the wallet reported since the last
    /// action.
    async fn sync_accounts(&mut self) {
        if let Some(accounts) = self.ctx.manager.account_change(&self.state.session).await {
            self.accounts_changed(&accounts).await;
        }
    }

    async fn finish(
        &mut self,
        action: &str,
        success: &str,
        result: Result<Receipt, BridgeError>,
    ) -> CallResult {
        match result {
            Ok(receipt) => {
                self.ctx.success(success);
                self.refresh_balance().await;
                CallResult::Receipt(Box::new(receipt))
            }
            Err(err) => self.ctx.failure(action, err),
        }
    }
}
