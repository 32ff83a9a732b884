pub(crate) mod roles;
pub(crate) mod system;
pub(crate) mod users;
