use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::roles::args::*;
pub use crate::modules::system::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage users and roles of a remote service")]
pub struct Cli {
    #[arg(long, env = "ROSTER_ADDR")]
    pub addr: Option<String>,
    #[arg(long, env = "ROSTER_CONFIG", help = "Config file path")]
    pub config: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    User(UserArgs),
    Role(RoleArgs),
    Config(ConfigArgs),
}
