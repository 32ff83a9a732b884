use crate::UserId;

pub const USERS: &str = "/user";
pub const ROLES: &str = "/role";

#[must_use]
pub fn user(id: UserId) -> String {
    format!("{USERS}/{id}")
}
