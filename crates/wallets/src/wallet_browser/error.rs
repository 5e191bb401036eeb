use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum BrowserWalletError {
    #[error("{operation} rejected: {reason}")]
    Rejected { operation: &'static str, reason: String },
    #[error("{operation} timed out after {timeout:?}")]
    Timeout { operation: &'static str, timeout: Duration },
    #[error("browser wallet not connected")]
    NotConnected,
    #[error("no wallet provider found in the browser")]
    ProviderMissing,
    #[error("browser wallet server error: {0}")]
    Server(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
