//! # dapp-bridge
//!
//! Typed invocations of the message board and vault contracts.
//!
//! [`ContractBridge`] builds a fresh [`ContractHandle`] for every call: a read-only one for
//! view methods and a signing one, derived from the connected [`dapp_wallets::Session`], for
//! transactions.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod bridge;
pub mod error;
pub mod handle;
pub mod interface;
pub mod result;

pub use bridge::{BridgeSettings, ContractBridge};
pub use error::BridgeError;
pub use handle::{Capability, ContractHandle};
pub use interface::{IMessageBoard, IVault, MESSAGE_BOARD_ADDRESS, VAULT_ADDRESS};
pub use result::CallResult;
