use roster_core::User;

use crate::cli_args::*;
use crate::modules::system::{print_json, Access};

pub(crate) async fn handle_user(args: UserArgs, access: &Access) -> anyhow::Result<()> {
    match args.command {
        UserCommand::List => {
            access.fetch_users().await;
        }
        UserCommand::Create(args) => {
            let user = User {
                email: args.email,
                password: args.password,
                free_text: args.free_text,
                roles: args.roles,
                ..User::new(args.login)
            };
            access.create_user(user).await;
        }
        UserCommand::Update(args) => {
            access.fetch_users().await;
            let Some(users) = access.users() else {
                return Ok(());
            };
            let Some(current) = users.into_iter().find(|user| user.id == Some(args.id)) else {
                anyhow::bail!("user not found: {}", args.id);
            };
            access.update_user(apply_update(current, args)).await;
        }
        UserCommand::Delete(args) => {
            access.delete_users(&args.ids).await;
        }
    }
    access.settle().await;
    if let Some(users) = access.users() {
        print_json(&users)?;
    }
    Ok(())
}

pub(crate) fn apply_update(mut user: User, args: UserUpdateArgs) -> User {
    if let Some(login) = args.login {
        user.login = login;
    }
    if let Some(email) = args.email {
        user.email = Some(email);
    }
    if let Some(password) = args.password {
        user.password = Some(password);
    }
    if let Some(free_text) = args.free_text {
        user.free_text = Some(free_text);
    }
    if let Some(locked) = args.locked {
        user.locked = locked;
    }
    if !args.roles.is_empty() {
        user.roles = args.roles;
    }
    user
}
