use dapp::{
    ShellNotifier, VaultScreen, opts::ConfigOpts, screens::DappContext,
    wallet::{self, DynWallet},
};
use dapp_bridge::CallResult;
use eyre::Result;
use std::{process::ExitCode, sync::Arc};

pub mod message;
pub mod units;
pub mod vault;

pub(crate) async fn context(opts: &ConfigOpts) -> Result<DappContext<DynWallet>> {
    let config = opts.load_config()?;
    debug!(wallet = %config.wallet, rpc_url = %config.rpc_url, "loaded config");
    wallet::context(&config, Arc::new(ShellNotifier)).await
}

/// Prints the outcome of a call to stdout and maps it to the exit code.
///
/// Failures have already been reported to the user at this point.
pub(crate) fn finish(result: CallResult) -> ExitCode {
    match result {
        CallResult::Value(value) => println!("{value}"),
        CallResult::Receipt(receipt) => println!("{}", receipt.transaction_hash),
        CallResult::Failure { .. } => return ExitCode::FAILURE,
    }
    ExitCode::SUCCESS
}

/// `dapp connect`
pub(crate) async fn connect(opts: &ConfigOpts) -> Result<ExitCode> {
    let mut screen = VaultScreen::new(context(opts).await?);
    if !screen.init().await && !screen.connect_wallet().await {
        return Ok(ExitCode::FAILURE);
    }
    if let Some(address) = screen.state().session.address() {
        println!("{address}");
    }
    Ok(ExitCode::SUCCESS)
}
