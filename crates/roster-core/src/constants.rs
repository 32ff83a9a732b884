/// Shown for every failure. The raw reason only goes to the logs.
pub const SUPPORT_ERROR_MESSAGE: &str =
    "An error occured, please contact support support@enioka.com for help.";

#[must_use]
pub fn created_user_message(login: &str) -> String {
    format!("Successfully created user: {login}")
}

#[must_use]
pub fn updated_user_message(login: &str) -> String {
    format!("Successfully updated user {login}")
}

#[must_use]
pub fn deleted_users_message(count: usize) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("Successfully deleted user{suffix}")
}
