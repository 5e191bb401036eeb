//! Browser wallet bridge.
//!
//! A local page talks to the wallet injected into the user's browser and relays account and
//! transaction requests queued by [`server::BrowserWalletServer`].

pub mod error;
pub mod server;
pub mod types;

mod app;
mod handlers;
mod queue;
mod router;
mod state;
mod wallet;

pub use wallet::BrowserWallet;
