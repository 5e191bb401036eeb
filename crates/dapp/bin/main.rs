#[macro_use]
extern crate tracing;

use clap::Parser;
use dapp::{handler, utils};
use eyre::Result;
use std::process::ExitCode;

mod args;
mod cmd;

use args::{Dapp, DappSubcommand};

fn main() -> Result<ExitCode> {
    handler::install();
    utils::load_dotenv();
    utils::subscriber();
    utils::enable_paint();
    let args = Dapp::parse();
    main_args(args)
}

#[tokio::main]
async fn main_args(args: Dapp) -> Result<ExitCode> {
    trace!(?args, "starting");
    match args.cmd {
        DappSubcommand::Connect => cmd::connect(&args.config).await,
        DappSubcommand::Message { command } => command.run(&args.config).await,
        DappSubcommand::Vault { command } => command.run(&args.config).await,
        DappSubcommand::Units { command } => command.run().map(|()| ExitCode::SUCCESS),
    }
}
