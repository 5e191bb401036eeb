//! A wallet backed by the unlocked accounts of a JSON-RPC node.

use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::{
    DynProvider, PendingTransactionBuilder, PendingTransactionError, Provider, ProviderBuilder,
    WatchTxError,
};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use std::{fmt, time::Duration};

use crate::{
    Receipt, WalletError, WalletProvider,
    error::METHOD_NOT_FOUND,
};

/// Uses a node's own accounts as the wallet: the node signs `eth_sendTransaction` requests for
/// its unlocked accounts, the same way a browser wallet signs and sends in one step.
///
/// Also serves as the read-only connection of wallets that cannot execute calls themselves.
#[derive(Clone)]
pub struct RpcWallet {
    provider: DynProvider,
}

impl fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcWallet").finish_non_exhaustive()
    }
}

impl RpcWallet {
    /// Connects to the node at `rpc_url` (`http(s)://`, `ws(s)://` or an IPC path).
    pub async fn connect(rpc_url: &str) -> Result<Self, WalletError> {
        debug!(%rpc_url, "connecting to node");
        let provider = ProviderBuilder::new().connect(rpc_url).await?;
        Ok(Self::new(provider.erased()))
    }

    /// Wraps an existing provider.
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        trace!("eth_accounts");
        Ok(self.provider.get_accounts().await?)
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        trace!("eth_requestAccounts");
        match self
            .provider
            .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
            .await
        {
            Ok(accounts) => Ok(accounts),
            // Plain nodes do not prompt; their unlocked accounts are always authorized.
            Err(err) if err.as_error_resp().is_some_and(|e| e.code == METHOD_NOT_FOUND) => {
                debug!("node does not support eth_requestAccounts, using eth_accounts");
                self.accounts().await
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        trace!(to = ?tx.to, "eth_call");
        Ok(self.provider.call(tx).await?)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        trace!(from = ?tx.from, to = ?tx.to, "eth_sendTransaction");
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<Receipt, WalletError> {
        debug!(%tx_hash, confirmations, "waiting for receipt");
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_required_confirmations(confirmations)
            .with_timeout(timeout)
            .get_receipt()
            .await
            .map_err(|err| match err {
                PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
                    WalletError::Timeout(timeout.unwrap_or_default())
                }
                PendingTransactionError::TransportError(err) => err.into(),
                err => WalletError::Rpc(err.to_string()),
            })?;
        Ok(receipt.into())
    }
}
