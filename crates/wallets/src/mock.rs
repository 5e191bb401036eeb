//! An in-memory [`WalletProvider`] that records every request it receives.

use alloy_primitives::{Address, B256, Bytes, TxHash, U256};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
    time::Duration,
};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::{Receipt, WalletError, WalletProvider};

/// A request received by a [`MockWallet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockRequest {
    Accounts,
    RequestAccounts,
    Call { to: Option<Address>, input: Bytes },
    SendTransaction { from: Option<Address>, to: Option<Address>, input: Bytes, value: Option<U256> },
    WaitForReceipt { tx_hash: TxHash, confirmations: u64 },
}

#[derive(Debug, Default)]
struct MockState {
    authorized: Vec<Address>,
    granted: Option<Vec<Address>>,
    rejection: Option<String>,
    calls: VecDeque<Result<Bytes, WalletError>>,
    sends: VecDeque<Result<TxHash, WalletError>>,
    receipts: VecDeque<Result<Receipt, WalletError>>,
    sent: HashMap<TxHash, (Address, Option<Address>)>,
    nonce: u64,
    requests: Vec<MockRequest>,
}

/// Scripted wallet for tests.
///
/// Clones share their state, so a test can keep a handle after giving the wallet away.
#[derive(Clone, Debug, Default)]
pub struct MockWallet {
    state: Arc<Mutex<MockState>>,
    send_gate: Arc<AsyncMutex<()>>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts returned by `eth_accounts`.
    pub fn with_authorized(self, accounts: Vec<Address>) -> Self {
        self.set_authorized(accounts);
        self
    }

    /// Replaces the authorized accounts, as a user disconnecting or switching accounts would.
    pub fn set_authorized(&self, accounts: Vec<Address>) {
        self.state.lock().authorized = accounts;
    }

    /// Accounts the user grants when prompted. Granted accounts become authorized.
    pub fn grant_on_request(self, accounts: Vec<Address>) -> Self {
        self.state.lock().granted = Some(accounts);
        self
    }

    /// Makes every prompt fail with a user rejection.
    pub fn reject_requests(self, reason: impl Into<String>) -> Self {
        self.state.lock().rejection = Some(reason.into());
        self
    }

    /// Queues the return data of the next `eth_call`.
    pub fn push_call(&self, data: impl Into<Bytes>) {
        self.state.lock().calls.push_back(Ok(data.into()));
    }

    /// Makes the next `eth_call` fail.
    pub fn push_call_error(&self, err: WalletError) {
        self.state.lock().calls.push_back(Err(err));
    }

    /// Hash returned by the next `eth_sendTransaction`.
    pub fn push_send(&self, tx_hash: TxHash) {
        self.state.lock().sends.push_back(Ok(tx_hash));
    }

    /// Makes the next `eth_sendTransaction` fail.
    pub fn push_send_error(&self, err: WalletError) {
        self.state.lock().sends.push_back(Err(err));
    }

    /// Queues the result of the next receipt wait. Without one, transactions succeed.
    ///
    /// A scripted receipt is reported for whichever transaction is being waited on.
    pub fn push_receipt(&self, receipt: Result<Receipt, WalletError>) {
        self.state.lock().receipts.push_back(receipt);
    }

    /// Holds every `eth_sendTransaction` until the returned guard is dropped.
    pub async fn pause_sends(&self) -> OwnedMutexGuard<()> {
        self.send_gate.clone().lock_owned().await
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.state.lock().requests.clone()
    }

    /// Forgets the recorded requests.
    pub fn clear_requests(&self) {
        self.state.lock().requests.clear();
    }

    fn record(&self, request: MockRequest) {
        self.state.lock().requests.push(request);
    }
}

fn input_of(tx: &TransactionRequest) -> Bytes {
    tx.input.input().cloned().unwrap_or_default()
}

fn recipient_of(tx: &TransactionRequest) -> Option<Address> {
    tx.to.and_then(|kind| kind.to().copied())
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.record(MockRequest::Accounts);
        Ok(self.state.lock().authorized.clone())
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.record(MockRequest::RequestAccounts);
        let mut state = self.state.lock();
        if let Some(reason) = &state.rejection {
            return Err(WalletError::Rejected(reason.clone()));
        }
        if let Some(granted) = state.granted.clone() {
            state.authorized = granted;
        }
        Ok(state.authorized.clone())
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        self.record(MockRequest::Call { to: recipient_of(&tx), input: input_of(&tx) });
        self.state
            .lock()
            .calls
            .pop_front()
            .unwrap_or_else(|| Err(WalletError::InvalidResponse("no scripted call result".into())))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        self.record(MockRequest::SendTransaction {
            from: tx.from,
            to: recipient_of(&tx),
            input: input_of(&tx),
            value: tx.value,
        });
        let _gate = self.send_gate.lock().await;

        let mut state = self.state.lock();
        let hash = match state.sends.pop_front() {
            Some(result) => result?,
            None => {
                state.nonce += 1;
                B256::from(U256::from(state.nonce))
            }
        };
        state.sent.insert(hash, (tx.from.unwrap_or_default(), recipient_of(&tx)));
        Ok(hash)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        _timeout: Option<Duration>,
    ) -> Result<Receipt, WalletError> {
        self.record(MockRequest::WaitForReceipt { tx_hash, confirmations });
        let mut state = self.state.lock();
        if let Some(receipt) = state.receipts.pop_front() {
            return receipt.map(|receipt| Receipt { transaction_hash: tx_hash, ..receipt });
        }
        let (from, to) = state.sent.get(&tx_hash).copied().unwrap_or_default();
        Ok(Receipt {
            transaction_hash: tx_hash,
            block_number: Some(state.nonce),
            gas_used: 21_000,
            status: true,
            from,
            to,
        })
    }
}
