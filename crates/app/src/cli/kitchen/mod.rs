use clap::{Args, Subcommand};

mod watch;

#[derive(Debug, Args)]
pub(crate) struct KitchenCommand {
    #[command(subcommand)]
    command: KitchenSubcommand,
}

#[derive(Debug, Subcommand)]
enum KitchenSubcommand {
    /// Follow the kitchen feed in the terminal
    Watch(watch::WatchArgs),
}

pub(crate) async fn run(command: KitchenCommand) -> Result<(), String> {
    match command.command {
        KitchenSubcommand::Watch(args) => watch::run(args).await,
    }
}
