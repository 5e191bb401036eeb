use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;
use auto_impl::auto_impl;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::WalletError;

/// Confirmation record of an included transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    /// `false` if the transaction reverted.
    pub status: bool,
    pub from: Address,
    pub to: Option<Address>,
}

impl From<TransactionReceipt> for Receipt {
    fn from(receipt: TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            status: ReceiptResponse::status(&receipt),
            from: receipt.from,
            to: receipt.to,
        }
    }
}

/// The capabilities of a wallet, modeled after the EIP-1193 provider API.
///
/// Every method is a suspension point: prompting the user, reaching the network and waiting
/// for inclusion all yield back to the runtime instead of blocking.
#[async_trait]
#[auto_impl(&, Arc, Box)]
pub trait WalletProvider: Send + Sync {
    /// Accounts the user already authorized (`eth_accounts`). Never prompts.
    async fn accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Asks the user for account access (`eth_requestAccounts`). May prompt.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Executes a read-only call (`eth_call`) and returns the raw return data.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError>;

    /// Signs and submits a transaction from `tx.from` (`eth_sendTransaction`).
    ///
    /// Resolves once the transaction has been accepted as pending.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError>;

    /// Waits until `tx_hash` is included with the requested number of confirmations.
    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<Receipt, WalletError>;
}
