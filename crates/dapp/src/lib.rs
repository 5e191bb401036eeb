//! # dapp
//!
//! The message board and vault screens and the helpers of the `dapp` binary.
//!
//! A screen owns its [`AppState`] and drives the session manager and the contract bridge the
//! way a button press would: make sure the wallet is connected, perform one call, report the
//! outcome through a [`dapp_common::Notify`] sink.

#[macro_use]
extern crate tracing;

pub mod handler;
pub mod notifier;
pub mod opts;
pub mod screens;
pub mod state;
pub mod utils;
pub mod wallet;

pub use notifier::ShellNotifier;
pub use screens::{DappContext, MessageScreen, VaultScreen};
pub use state::AppState;
