use crate::cli_args::*;
use crate::modules::system::{print_json, Access};

pub(crate) async fn handle_role(args: RoleArgs, access: &Access) -> anyhow::Result<()> {
    match args.command {
        RoleCommand::List => {
            access.fetch_roles().await;
            if let Some(roles) = access.roles() {
                print_json(&roles)?;
            }
        }
    }
    Ok(())
}
