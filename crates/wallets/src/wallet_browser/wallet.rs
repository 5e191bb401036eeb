use std::time::Duration;

use alloy_primitives::{Address, Bytes, TxHash};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    Receipt, RpcWallet, WalletError, WalletProvider,
    wallet_browser::{
        server::BrowserWalletServer,
        types::{BrowserTransaction, ConnectionStatus},
    },
};

/// A wallet living in the user's browser.
///
/// Account access and transactions go through the bridge page served by
/// [`BrowserWalletServer`]. Reads and receipt polling use a node connection directly.
#[derive(Clone, Debug)]
pub struct BrowserWallet {
    server: BrowserWalletServer,
    reader: RpcWallet,
}

impl BrowserWallet {
    pub fn new(server: BrowserWalletServer, reader: RpcWallet) -> Self {
        Self { server, reader }
    }

    pub fn server(&self) -> &BrowserWalletServer {
        &self.server
    }
}

#[async_trait]
impl WalletProvider for BrowserWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        match self.server.status() {
            ConnectionStatus::Connected(connection) => Ok(vec![connection.address]),
            _ => Ok(Vec::new()),
        }
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let connection = self.server.request_connection().await?;
        Ok(vec![connection.address])
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, WalletError> {
        self.reader.call(tx).await
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        let request = BrowserTransaction { id: Uuid::new_v4(), request: tx };
        Ok(self.server.request_transaction(request).await?)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<Receipt, WalletError> {
        self.reader.wait_for_receipt(tx_hash, confirmations, timeout).await
    }
}
