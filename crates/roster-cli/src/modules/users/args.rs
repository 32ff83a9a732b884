use clap::{Args, Subcommand};
use roster_core::{RoleId, UserId};

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    #[command(about = "List users")]
    List,
    #[command(about = "Create a user")]
    Create(UserCreateArgs),
    #[command(about = "Update an existing user")]
    Update(UserUpdateArgs),
    #[command(about = "Delete one or more users")]
    Delete(UserDeleteArgs),
}

#[derive(Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub login: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub free_text: Option<String>,
    #[arg(long = "role", help = "Role ID, repeatable")]
    pub roles: Vec<RoleId>,
}

#[derive(Args)]
pub struct UserUpdateArgs {
    pub id: UserId,
    #[arg(long)]
    pub login: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub free_text: Option<String>,
    #[arg(long)]
    pub locked: Option<bool>,
    #[arg(long = "role", help = "Role ID, repeatable; replaces the current roles")]
    pub roles: Vec<RoleId>,
}

#[derive(Args)]
pub struct UserDeleteArgs {
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<UserId>,
}
