use dapp_wallets::Receipt;
use std::fmt;

use crate::BridgeError;

/// Outcome of one contract invocation, ready to be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallResult {
    /// A read call returned this (display-ready) value.
    Value(String),
    /// A transaction was included.
    Receipt(Box<Receipt>),
    Failure { message: String },
}

impl CallResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure { message: message.into() }
    }

    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failure { .. })
    }

    /// The failure message, if the call failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message),
            _ => None,
        }
    }
}

impl From<BridgeError> for CallResult {
    fn from(err: BridgeError) -> Self {
        Self::failure(err.to_string())
    }
}

impl From<Result<String, BridgeError>> for CallResult {
    fn from(result: Result<String, BridgeError>) -> Self {
        result.map_or_else(Into::into, Self::Value)
    }
}

impl From<Result<Receipt, BridgeError>> for CallResult {
    fn from(result: Result<Receipt, BridgeError>) -> Self {
        result.map_or_else(Into::into, |receipt| Self::Receipt(Box::new(receipt)))
    }
}

impl fmt::Display for CallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.write_str(value),
            Self::Receipt(receipt) => write!(f, "{}", receipt.transaction_hash),
            Self::Failure { message } => f.write_str(message),
        }
    }
}
