use alloy_primitives::U256;
use clap::Subcommand;
use dapp_common::{DEFAULT_DECIMALS, format_amount, parse_amount};
use eyre::Result;

#[derive(Debug, Subcommand)]
pub enum UnitsSubcommand {
    /// Convert a decimal amount to base units.
    #[command(visible_alias = "tb")]
    ToBase {
        /// The amount, e.g. `2.5`.
        amount: String,

        /// Number of decimals of the base unit.
        #[arg(long, short, default_value_t = DEFAULT_DECIMALS)]
        decimals: u8,
    },

    /// Convert base units to a decimal amount.
    #[command(visible_alias = "fb")]
    FromBase {
        /// The integer amount in base units.
        value: U256,

        /// Number of decimals of the base unit.
        #[arg(long, short, default_value_t = DEFAULT_DECIMALS)]
        decimals: u8,
    },
}

impl UnitsSubcommand {
    pub fn run(self) -> Result<()> {
        match self {
            Self::ToBase { amount, decimals } => println!("{}", parse_amount(&amount, decimals)?),
            Self::FromBase { value, decimals } => println!("{}", format_amount(value, decimals)?),
        }
        Ok(())
    }
}
