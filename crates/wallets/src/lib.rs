//! # dapp-wallets
//!
//! Wallet capabilities and the session manager that gates access to them.
//!
//! A [`WalletProvider`] exposes the account and transaction surface of a wallet: a
//! non-prompting account query, a prompting account request, a read-only call path and a
//! signing path. [`SessionManager`] turns that surface into a [`Session`] and is the only
//! component allowed to mark a session as connected.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod error;
pub mod provider;
pub mod rpc;
pub mod session;
pub mod wallet_browser;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::WalletError;
pub use provider::{Receipt, WalletProvider};
pub use rpc::RpcWallet;
pub use session::{Session, SessionManager};
pub use wallet_browser::{BrowserWallet, server::BrowserWalletServer};
