use alloy_transport::TransportError;
use std::time::Duration;

use crate::wallet_browser::error::BrowserWalletError;

/// EIP-1193 code for a request the user declined.
pub const USER_REJECTED_REQUEST: i64 = 4001;

/// JSON-RPC code for an unknown method.
pub const METHOD_NOT_FOUND: i64 = -32601;

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("no wallet provider found, please install a browser wallet such as MetaMask")]
    ProviderMissing,
    #[error("request rejected by the wallet: {0}")]
    Rejected(String),
    #[error("timed out after {0:?} waiting for the wallet")]
    Timeout(Duration),
    /// The provider answered with an error; holds the provider's message verbatim.
    #[error("{0}")]
    Rpc(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    #[error(transparent)]
    Browser(BrowserWalletError),
}

impl WalletError {
    /// The message to show a user for this error.
    ///
    /// Provider errors keep the provider's own wording, everything else uses the display
    /// implementation.
    pub fn message(&self) -> String {
        match self {
            Self::Rpc(message) | Self::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<TransportError> for WalletError {
    fn from(err: TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload) if payload.code == USER_REJECTED_REQUEST => {
                Self::Rejected(payload.message.to_string())
            }
            Some(payload) => Self::Rpc(payload.message.to_string()),
            None => Self::Rpc(err.to_string()),
        }
    }
}

impl From<BrowserWalletError> for WalletError {
    fn from(err: BrowserWalletError) -> Self {
        match err {
            BrowserWalletError::ProviderMissing => Self::ProviderMissing,
            BrowserWalletError::Rejected { reason, .. } => Self::Rejected(reason),
            BrowserWalletError::Timeout { timeout, .. } => Self::Timeout(timeout),
            other => Self::Browser(other),
        }
    }
}
