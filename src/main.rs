use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tailscale_inventory::{
    CommandSource, FileSource, InventoryDocument, Snapshot, StatusSource,
};

#[derive(Parser, Debug)]
#[command(name = "tailscale-inventory")]
#[command(about = "Ansible dynamic inventory backed by tailscale status")]
struct Args {
    /// Print the full inventory document (the default when no mode is given)
    #[arg(long, conflicts_with = "host")]
    list: bool,

    /// Print only the named host's facts
    #[arg(long, value_name = "HOSTNAME")]
    host: Option<String>,

    /// Read status JSON from a file instead of running tailscale
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(list = args.list, host = ?args.host, "invocation mode");

    let source: Box<dyn StatusSource> = match &args.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(CommandSource::for_current_platform()?),
    };

    debug!(source = source.description(), "fetching tailscale status");
    let status = source.fetch()?;
    let snapshot = Snapshot::from_status(status);
    debug!(hosts = snapshot.len(), "snapshot assembled");
    let document = InventoryDocument::from_snapshot(&snapshot);

    match &args.host {
        Some(host) => match document.host_facts(host) {
            Some(facts) => println!("{}", serde_json::to_string_pretty(facts)?),
            // Unknown host is not an error in the inventory protocol
            None => println!("{{}}"),
        },
        None => println!("{}", serde_json::to_string_pretty(&document.to_ansible())?),
    }

    Ok(())
}
