use crate::cmd::{message::MessageSubcommand, units::UnitsSubcommand, vault::VaultSubcommand};
use clap::{Parser, Subcommand};
use dapp::opts::ConfigOpts;

/// Talk to the message board and vault contracts with your wallet.
#[derive(Debug, Parser)]
#[command(name = "dapp", version, next_display_order = None)]
pub struct Dapp {
    #[command(flatten)]
    pub config: ConfigOpts,

    #[command(subcommand)]
    pub cmd: DappSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum DappSubcommand {
    /// Connect the wallet and show the active account.
    #[command(visible_alias = "c")]
    Connect,

    /// Read or replace the message on the board.
    #[command(visible_alias = "m")]
    Message {
        #[command(subcommand)]
        command: MessageSubcommand,
    },

    /// Check the vault balance, deposit or withdraw.
    #[command(visible_alias = "v")]
    Vault {
        #[command(subcommand)]
        command: VaultSubcommand,
    },

    /// Convert between decimal amounts and base units.
    #[command(visible_alias = "u")]
    Units {
        #[command(subcommand)]
        command: UnitsSubcommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Dapp::command().debug_assert();
    }

    #[test]
    fn parses_amounts_as_text() {
        let args = Dapp::parse_from(["dapp", "--wallet", "none", "vault", "deposit", "1.50"]);
        match args.cmd {
            DappSubcommand::Vault { command: VaultSubcommand::Deposit { amount } } => {
                assert_eq!(amount, "1.50");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
