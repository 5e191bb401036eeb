//! Error reporting for the `dapp` binary.

use dapp_common::{UnitsError, errors::dedup_chain};
use dapp_config::ExtractConfigError;
use dapp_wallets::{WalletError, wallet_browser::error::BrowserWalletError};
use eyre::{Chain, EyreHandler};
use std::{error::Error, fmt};

/// Reports errors the way notifications are worded: the chain on one line, followed by a
/// hint when the cause is something the user can fix.
///
/// With `DAPP_DEBUG` set, `Debug` output is delegated to the `color-eyre` report instead.
#[derive(Default)]
pub struct Handler {
    report: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    pub fn new(report: Option<Box<dyn EyreHandler>>) -> Self {
        Self { report }
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dedup_chain(error).join("; "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(report) = &self.report {
            return report.debug(error, f);
        }
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        self.display(error, f)?;
        if let Some(hint) = hint(error) {
            write!(f, "\n\nhint: {hint}")?;
        }
        Ok(())
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(report) = &mut self.report {
            report.track_caller(location);
        }
    }
}

/// What the user can do about `error`, judged by the first cause that has a known remedy.
pub fn hint(error: &(dyn Error + 'static)) -> Option<&'static str> {
    Chain::new(error).find_map(|cause| {
        if cause.is::<ExtractConfigError>() {
            return Some("check dapp.toml and the DAPP_* environment variables");
        }
        if cause.is::<UnitsError>() {
            return Some("amounts are plain decimal numbers such as `1.5`");
        }
        match cause.downcast_ref::<BrowserWalletError>() {
            Some(BrowserWalletError::Io(_)) => {
                return Some("the port may be in use, pick another one with `--browser-port`");
            }
            Some(BrowserWalletError::Timeout { .. }) => {
                return Some("keep the bridge page open and answer the wallet prompt in time");
            }
            _ => {}
        }
        match cause.downcast_ref::<WalletError>()? {
            WalletError::ProviderMissing => {
                Some("select a wallet with `--wallet rpc` or `--wallet browser`")
            }
            WalletError::Rpc(_) => Some("make sure a node is listening on `--rpc-url`"),
            WalletError::Timeout(_) => {
                Some("keep the bridge page open and answer the wallet prompt in time")
            }
            _ => None,
        }
    })
}

/// Installs the [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// Panics always go through `color-eyre`.
pub fn install() {
    let (panic_hook, report_hook) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug. Please report it together with the command you ran.")
        .into_hooks();
    panic_hook.install();
    let report_hook = report_hook.into_eyre_hook();
    let debug = std::env::var_os("DAPP_DEBUG").is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |error| {
        Box::new(Handler::new(debug.then(|| report_hook(error))))
    })) {
        debug!(%err, "failed to install the eyre hook");
    }
}
