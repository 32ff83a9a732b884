use clap::{Args, Subcommand};
use roster_client::{PartialDeletePolicy, RefreshMode};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the current configuration")]
    Show,
    #[command(about = "Update configuration values")]
    Set(ConfigSetArgs),
}

#[derive(Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "Server base URL")]
    pub addr: Option<String>,
    #[arg(long, help = "Refresh after mutations: detached or awaited")]
    pub refresh: Option<RefreshMode>,
    #[arg(long, help = "After a partially failed delete: keep-stale or roll-forward")]
    pub partial_delete: Option<PartialDeletePolicy>,
}
