use dapp_common::UnitsError;
use dapp_wallets::WalletError;

/// Failure of a contract call.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A state-changing call was attempted without an active session.
    #[error("not connected")]
    NotConnected,
    /// Another state-changing call has not finished yet.
    #[error("another transaction is still pending")]
    Busy,
    /// The call reverted, the network failed or the response could not be decoded.
    #[error("{0}")]
    CallFailed(String),
    #[error(transparent)]
    Units(#[from] UnitsError),
}

impl From<WalletError> for BridgeError {
    fn from(err: WalletError) -> Self {
        Self::CallFailed(err.message())
    }
}
