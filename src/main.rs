use anyhow::Context;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

use storehouse::config::{load_config, DEFAULT_CONFIG_PATH};
use storehouse::logger::init_logger;
use storehouse::Server;

#[derive(Debug, Parser)]
#[command(name = "storehouse")]
#[command(about = "Web interface for tracking capacity-bounded storage units")]
struct Cli {
    /// Configuration file; missing files are ignored
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Listen address, overrides the config file
    #[arg(long)]
    address: Option<IpAddr>,

    /// Listen port, overrides the config file
    #[arg(long)]
    port: Option<u16>,

    #[arg(long, short, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut cfg = load_config(&cli.config).context("Configuration is malformed")?;
    if let Some(address) = cli.address {
        cfg.server.address = address;
    }
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    Server::builder().config(cfg.server).build().run().await
}
