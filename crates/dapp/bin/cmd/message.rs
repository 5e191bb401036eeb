use clap::Subcommand;
use dapp::{MessageScreen, opts::ConfigOpts};
use eyre::Result;
use std::process::ExitCode;

use super::{context, finish};

#[derive(Debug, Subcommand)]
pub enum MessageSubcommand {
    /// Print the stored message.
    Get,

    /// Store a new message.
    Set {
        /// The message to store.
        message: String,
    },
}

impl MessageSubcommand {
    pub async fn run(self, opts: &ConfigOpts) -> Result<ExitCode> {
        let mut screen = MessageScreen::new(context(opts).await?);
        let result = match self {
            Self::Get => screen.get_message().await,
            Self::Set { message } => screen.set_message(&message).await,
        };
        Ok(finish(result))
    }
}
