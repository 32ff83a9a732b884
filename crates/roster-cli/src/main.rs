use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use roster_client::{HttpTransport, UserAccess};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::system::{
    config_path, ensure_secure_addr, handle_config_command, load_config, resolve_addr,
    save_config, TerminalNotifier,
};

pub(crate) const DEFAULT_ADDR: &str = "https://127.0.0.1:1789";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let path = match cli.config.as_deref() {
        Some(path) => PathBuf::from(path),
        None => config_path()?,
    };
    let mut config = load_config(&path)?;
    debug!(path = %path.display(), "config loaded");

    match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&path, &config)?;
        }
        command => {
            let addr = resolve_addr(cli.addr, &config);
            ensure_secure_addr(&addr, cli.insecure)?;
            debug!(
                addr = %addr,
                refresh = %config.refresh,
                partial_delete = %config.partial_delete,
                "resolved server"
            );
            let client = reqwest::Client::builder()
                .danger_accept_invalid_certs(cli.insecure)
                .build()?;
            let notifier = Arc::new(TerminalNotifier::default());
            let access = UserAccess::with_config(
                HttpTransport::new(client, &addr, cli.insecure),
                Arc::clone(&notifier),
                config.access_config(),
            );

            handle_command(command, &access).await?;
            access.settle().await;

            let failures = notifier.error_count();
            if failures > 0 {
                anyhow::bail!("{failures} request(s) failed, run with -v for details");
            }
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
