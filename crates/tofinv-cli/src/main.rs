//! tofinv: dynamic Ansible inventory fed by OpenTofu state
//!
//! Ansible calls this binary with `--list` to get the full inventory and may
//! call `--host <name>` per host; per-host variables already ship inside
//! `_meta.hostvars`, so the latter always answers with an empty object.

use std::io;
use std::process;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use color_eyre::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tofinv_ansible::{InventoryBuilder, InventorySettings};
use tofinv_exec::local::LocalRunner;
use tofinv_state::client::TofuClient;

/// OpenTofu-backed dynamic inventory for Ansible
#[derive(Parser, Debug)]
#[command(name = "tofinv", version, about)]
#[command(group(ArgGroup::new("mode").required(true).args(["list", "host"])))]
struct Cli {
    /// Print the full inventory document as JSON
    #[arg(long)]
    list: bool,

    /// Print variables for one host (always `{}`, hostvars ship in `_meta`)
    #[arg(long, value_name = "HOSTNAME")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout is reserved for the inventory JSON, all diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("Usage: tofinv --list or --host <hostname>");
            process::exit(1);
        }
    };

    if cli.list {
        let runner = Arc::new(LocalRunner::new());
        let client = TofuClient::new(runner);
        let outputs = client.fetch_outputs().await?;

        let builder = InventoryBuilder::new(InventorySettings::default());
        let document = builder.build(&outputs)?;

        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        // --host never touches the state, vars were delivered with --list
        debug!(host = ?cli.host, "per-host query answered from _meta");
        println!("{{}}");
    }

    Ok(())
}
