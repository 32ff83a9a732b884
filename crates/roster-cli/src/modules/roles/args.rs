use clap::{Args, Subcommand};

#[derive(Args)]
pub struct RoleArgs {
    #[command(subcommand)]
    pub command: RoleCommand,
}

#[derive(Subcommand)]
pub enum RoleCommand {
    #[command(about = "List roles")]
    List,
}
