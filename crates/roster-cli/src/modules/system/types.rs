use std::sync::Arc;

use roster_client::{AccessConfig, HttpTransport, PartialDeletePolicy, RefreshMode, UserAccess};
use serde::{Deserialize, Serialize};

use super::TerminalNotifier;

pub(crate) type Access = UserAccess<HttpTransport, Arc<TerminalNotifier>>;

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub refresh: RefreshMode,
    #[serde(default)]
    pub partial_delete: PartialDeletePolicy,
}

impl CliConfig {
    pub fn access_config(&self) -> AccessConfig {
        AccessConfig {
            refresh: self.refresh,
            partial_delete: self.partial_delete,
        }
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
