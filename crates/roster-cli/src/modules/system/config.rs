use std::fs;
use std::path::{Path, PathBuf};

use super::types::{print_json, CliConfig};
use crate::cli_args::{ConfigArgs, ConfigCommand};
use crate::DEFAULT_ADDR;

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => print_json(config)?,
        ConfigCommand::Set(args) => {
            if let Some(addr) = args.addr {
                let addr = addr.trim();
                if addr.is_empty() {
                    anyhow::bail!("addr must not be empty");
                }
                config.addr = Some(addr.trim_end_matches('/').to_string());
            }
            if let Some(refresh) = args.refresh {
                config.refresh = refresh;
            }
            if let Some(policy) = args.partial_delete {
                config.partial_delete = policy;
            }
        }
    }
    Ok(())
}

pub(crate) fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".roster").join("config.json"))
}

pub(crate) fn load_config(path: &Path) -> anyhow::Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config(path: &Path, config: &CliConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub(crate) fn resolve_addr(addr_arg: Option<String>, config: &CliConfig) -> String {
    addr_arg
        .or_else(|| config.addr.clone())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    if addr.starts_with("http://") && !allow_insecure {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}
