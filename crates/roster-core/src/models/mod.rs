mod ids;
mod structs;

pub use ids::{RoleId, UserId};
pub use structs::{Role, User};

#[cfg(test)]
mod tests;
