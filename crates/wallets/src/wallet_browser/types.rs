use alloy_primitives::{Address, ChainId, TxHash};
use alloy_rpc_types::TransactionRequest;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The account and chain a browser wallet is connected with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub address: Address,
    pub chain_id: ChainId,
}

impl Connection {
    pub const fn new(address: Address, chain_id: ChainId) -> Self {
        Self { address, chain_id }
    }
}

/// Connection state as reported by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// The page has not reported yet.
    #[default]
    Pending,
    Connected(Connection),
    /// The wallet exposes no authorized account.
    Disconnected,
    /// The page found no injected provider.
    ProviderMissing,
    /// The user declined the account request.
    Rejected { reason: String },
}

/// Answer to `GET /api/connection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    #[serde(flatten)]
    pub status: ConnectionStatus,
    /// Whether the page should prompt for account access.
    pub connect_requested: bool,
}

/// A transaction waiting to be signed and sent by the page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BrowserTransaction {
    pub id: Uuid,
    #[serde(flatten)]
    pub request: TransactionRequest,
}

/// The page's answer to a [`BrowserTransaction`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub hash: Option<TxHash>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum BrowserApiResponse<T = ()> {
    Ok(T),
    Error { message: String },
}

impl BrowserApiResponse {
    pub fn ok() -> Self {
        Self::Ok(())
    }
}

impl<T> BrowserApiResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self::Ok(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }
}
