mod message;
mod vault;

use alloy_primitives::{Address, U256, address};
use dapp::screens::DappContext;
use dapp_bridge::BridgeSettings;
use dapp_common::RecordingNotifier;
use dapp_wallets::mock::MockWallet;
use std::sync::Arc;

pub(crate) const ALICE: Address = address!("0xAA00000000000000000000000000000000000001");
pub(crate) const BOB: Address = address!("0xbB00000000000000000000000000000000000002");

#[allow(unused)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub(crate) fn context(
    wallet: Option<&MockWallet>,
) -> (DappContext<MockWallet>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = DappContext::new(wallet.cloned(), BridgeSettings::default(), notifier.clone());
    (ctx, notifier)
}

/// `amount` ether in wei.
pub(crate) fn ether(amount: &str) -> U256 {
    dapp_common::parse_amount(amount, 18).unwrap()
}
