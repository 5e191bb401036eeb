use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use dapp_common::{DEFAULT_DECIMALS, format_amount, parse_amount};
use dapp_wallets::{Receipt, Session, WalletProvider};
use std::time::Duration;
use tokio::sync::Mutex;

use crate::{
    BridgeError,
    handle::{Capability, ContractHandle},
    interface::{IMessageBoard, IVault, MESSAGE_BOARD_ADDRESS, VAULT_ADDRESS},
};

/// How transactions are awaited and amounts scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BridgeSettings {
    /// Blocks to wait for after inclusion.
    pub confirmations: u64,
    /// Upper bound for the receipt wait. `None` leaves it to the provider.
    pub transaction_timeout: Option<Duration>,
    /// Decimals of the amounts handled by the vault.
    pub decimals: u8,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self { confirmations: 1, transaction_timeout: None, decimals: DEFAULT_DECIMALS }
    }
}

/// Performs the contract invocations of the message board and the vault.
///
/// Reads go through the read-only path and work without a session. Writes require a connected
/// [`Session`], and only one of them may be in flight at a time.
#[derive(Debug)]
pub struct ContractBridge<W> {
    provider: Option<W>,
    settings: BridgeSettings,
    write_lock: Mutex<()>,
}

impl<W: WalletProvider> ContractBridge<W> {
    pub fn new(provider: Option<W>, settings: BridgeSettings) -> Self {
        Self { provider, settings, write_lock: Mutex::new(()) }
    }

    pub const fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    fn handle(
        &self,
        address: Address,
        capability: Capability,
    ) -> Result<ContractHandle<'_, W>, BridgeError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| BridgeError::CallFailed("no wallet provider found".into()))?;
        Ok(ContractHandle::new(address, provider, capability))
    }

    /// Invokes a view method on `address`.
    ///
    /// The caller is passed along when the session is connected so that methods depending on
    /// `msg.sender` see the active account.
    pub async fn read_call<C: SolCall>(
        &self,
        session: &Session,
        address: Address,
        call: C,
    ) -> Result<C::Return, BridgeError> {
        let capability = Capability::ReadOnly { caller: session.address() };
        self.handle(address, capability)?.call(&call).await
    }

    /// Submits a transaction invoking `call` on `address` and waits for its receipt.
    ///
    /// Fails with [`BridgeError::NotConnected`] before touching the provider if `session` is
    /// not connected, and with [`BridgeError::Busy`] while another write is in flight.
    pub async fn write_call<C: SolCall>(
        &self,
        session: &Session,
        address: Address,
        call: C,
        value: Option<U256>,
    ) -> Result<Receipt, BridgeError> {
        let from = signer_of(session)?;
        let _guard = self.write_lock.try_lock().map_err(|_| {
            debug!(method = C::SIGNATURE, "rejecting overlapping transaction");
            BridgeError::Busy
        })?;

        let handle = self.handle(address, Capability::Signer(from))?;
        let tx_hash = handle.send(&call, value).await?;
        debug!(%tx_hash, method = C::SIGNATURE, "transaction pending");

        let receipt = handle
            .wait_for_receipt(tx_hash, self.settings.confirmations, self.settings.transaction_timeout)
            .await?;
        if !receipt.status {
            warn!(%tx_hash, method = C::SIGNATURE, "transaction reverted");
            return Err(BridgeError::CallFailed(format!("transaction reverted: {tx_hash}")));
        }

        info!(%tx_hash, block = ?receipt.block_number, method = C::SIGNATURE, "transaction confirmed");
        Ok(receipt)
    }

    /// The stored message.
    pub async fn get_message(&self, session: &Session) -> Result<String, BridgeError> {
        self.read_call(session, MESSAGE_BOARD_ADDRESS, IMessageBoard::getMessageCall {}).await
    }

    /// Replaces the stored message.
    pub async fn set_message(
        &self,
        session: &Session,
        message: &str,
    ) -> Result<Receipt, BridgeError> {
        let call = IMessageBoard::setMessageCall { message: message.to_string() };
        self.write_call(session, MESSAGE_BOARD_ADDRESS, call, None).await
    }

    /// The vault balance of the active account as a decimal string.
    pub async fn get_balance(&self, session: &Session) -> Result<String, BridgeError> {
        let balance = self.read_call(session, VAULT_ADDRESS, IVault::getBalanceCall {}).await?;
        Ok(format_amount(balance, self.settings.decimals)?)
    }

    /// Deposits `amount` (a decimal string), attaching the same amount of native currency.
    pub async fn deposit(&self, session: &Session, amount: &str) -> Result<Receipt, BridgeError> {
        signer_of(session)?;
        let amount = parse_amount(amount, self.settings.decimals)?;
        self.write_call(session, VAULT_ADDRESS, IVault::depositCall { amount }, Some(amount)).await
    }

    /// Withdraws `amount` (a decimal string).
    pub async fn withdraw(&self, session: &Session, amount: &str) -> Result<Receipt, BridgeError> {
        signer_of(session)?;
        let amount = parse_amount(amount, self.settings.decimals)?;
        self.write_call(session, VAULT_ADDRESS, IVault::withdrawCall { amount }, None).await
    }
}

fn signer_of(session: &Session) -> Result<Address, BridgeError> {
    session.address().ok_or(BridgeError::NotConnected)
}
