pub(crate) mod args;
pub(crate) mod config;
mod notify;
pub(crate) mod types;

pub(crate) use config::{
    config_path, ensure_secure_addr, handle_config_command, load_config, resolve_addr, save_config,
};
pub(crate) use notify::TerminalNotifier;
pub(crate) use types::{print_json, Access};
