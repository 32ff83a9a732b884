use crate::cli_args::*;
use crate::modules::roles::handle_role;
use crate::modules::system::Access;
use crate::modules::users::handle_user;

pub(crate) async fn handle_command(command: Command, access: &Access) -> anyhow::Result<()> {
    match command {
        Command::User(args) => handle_user(args, access).await?,
        Command::Role(args) => handle_role(args, access).await?,
        Command::Config(_) => unreachable!(),
    }
    Ok(())
}
