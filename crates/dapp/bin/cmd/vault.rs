use clap::Subcommand;
use dapp::{VaultScreen, opts::ConfigOpts};
use dapp_bridge::CallResult;
use eyre::Result;
use std::process::ExitCode;

use super::{context, finish};

#[derive(Debug, Subcommand)]
pub enum VaultSubcommand {
    /// Print the vault balance of the active account.
    #[command(visible_alias = "b")]
    Balance,

    /// Deposit into the vault.
    #[command(visible_alias = "d")]
    Deposit {
        /// The amount as a decimal number, e.g. `1.5`.
        amount: String,
    },

    /// Withdraw from the vault.
    #[command(visible_alias = "w")]
    Withdraw {
        /// The amount as a decimal number, e.g. `0.25`.
        amount: String,
    },
}

impl VaultSubcommand {
    pub async fn run(self, opts: &ConfigOpts) -> Result<ExitCode> {
        let mut screen = VaultScreen::new(context(opts).await?);
        let result = match self {
            Self::Balance => {
                if screen.init().await {
                    match screen.state().balance.clone() {
                        Some(balance) => CallResult::Value(balance),
                        None => CallResult::failure("balance unavailable"),
                    }
                } else {
                    screen.refresh_balance().await
                }
            }
            Self::Deposit { amount } => {
                if !screen.init().await {
                    screen.connect_wallet().await;
                }
                screen.handle_deposit(&amount).await
            }
            Self::Withdraw { amount } => {
                if !screen.init().await {
                    screen.connect_wallet().await;
                }
                screen.handle_withdraw(&amount).await
            }
        };
        Ok(finish(result))
    }
}
