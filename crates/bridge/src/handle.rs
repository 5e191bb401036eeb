use alloy_primitives::{Address, TxHash, TxKind, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolCall;
use dapp_wallets::{Receipt, WalletProvider};
use std::time::Duration;

use crate::BridgeError;

/// What a [`ContractHandle`] may do with the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// `eth_call` only, optionally on behalf of `caller`.
    ReadOnly { caller: Option<Address> },
    /// Calls and transactions signed by the given account.
    Signer(Address),
}

impl Capability {
    const fn from(&self) -> Option<Address> {
        match *self {
            Self::ReadOnly { caller } => caller,
            Self::Signer(address) => Some(address),
        }
    }
}

/// A binding of a deployed contract to a provider.
///
/// Handles are built for a single invocation and never reused.
#[derive(Debug)]
pub struct ContractHandle<'a, W> {
    address: Address,
    provider: &'a W,
    capability: Capability,
}

impl<'a, W: WalletProvider> ContractHandle<'a, W> {
    pub const fn new(address: Address, provider: &'a W, capability: Capability) -> Self {
        Self { address, provider, capability }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn capability(&self) -> Capability {
        self.capability
    }

    fn request<C: SolCall>(&self, call: &C, value: Option<U256>) -> TransactionRequest {
        TransactionRequest {
            from: self.capability.from(),
            to: Some(TxKind::Call(self.address)),
            input: TransactionInput::new(call.abi_encode().into()),
            value,
            ..Default::default()
        }
    }

    /// Executes `call` without changing state and decodes its return value.
    pub async fn call<C: SolCall>(&self, call: &C) -> Result<C::Return, BridgeError> {
        trace!(address = %self.address, method = C::SIGNATURE, "eth_call");
        let data = self.provider.call(self.request(call, None)).await.map_err(|err| {
            debug!(address = %self.address, method = C::SIGNATURE, %err, "call failed");
            BridgeError::from(err)
        })?;
        C::abi_decode_returns(&data).map_err(|err| {
            BridgeError::CallFailed(format!("failed to decode {} return data: {err}", C::SIGNATURE))
        })
    }

    /// Submits `call` as a transaction, attaching `value` if given.
    ///
    /// Resolves once the transaction is pending.
    pub async fn send<C: SolCall>(
        &self,
        call: &C,
        value: Option<U256>,
    ) -> Result<TxHash, BridgeError> {
        let Capability::Signer(from) = self.capability else {
            return Err(BridgeError::NotConnected);
        };
        trace!(address = %self.address, %from, method = C::SIGNATURE, ?value, "eth_sendTransaction");
        self.provider.send_transaction(self.request(call, value)).await.map_err(|err| {
            debug!(address = %self.address, method = C::SIGNATURE, %err, "transaction failed");
            BridgeError::from(err)
        })
    }

    /// Waits until `tx_hash` is included with `confirmations` blocks on top.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<Receipt, BridgeError> {
        Ok(self.provider.wait_for_receipt(tx_hash, confirmations, timeout).await?)
    }
}
