//! CLI for inspecting the network address registry.
//!
//! Subcommands:
//! - `list`: List registered networks
//! - `show`: Print the address record of a network
//! - `get`: Print a single address
//! - `check`: Validate every configured address

use clap::{Parser, Subcommand};
use netconf::{
    check_registry, config::Config, load_registry, lookup_field, render_json, render_network,
    select_network,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "netconf")]
#[command(about = "Inspect per-network contract addresses")]
struct Cli {
    /// Path to an optional TOML file with a default network and address overrides
    #[arg(short, long, env = "NETCONF_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered networks
    List,

    /// Print the address record of a network
    Show {
        /// Network name (defaults to the config file's network, then sepolia)
        network: Option<String>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single address, e.g. `get sepolia router`
    Get {
        /// Network name
        network: String,

        /// Field name (link, registrar, router, usdcAddress, vrfCoordinator)
        field: String,
    },

    /// Validate every configured address
    Check,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    let registry = load_registry(&config)?;

    match cli.command {
        Command::List => {
            for network in registry.iter() {
                let explorer = if network.explorer.is_empty() {
                    "-"
                } else {
                    network.explorer.as_str()
                };
                println!("{:<12} {:>10}  {}", network.name, network.chain_id, explorer);
            }
        }
        Command::Show { network, json } => {
            let name = select_network(&config, network.as_deref());
            let network = registry.network(name)?;
            if json {
                println!("{}", render_json(&network.addresses)?);
            } else {
                print!("{}", render_network(network));
            }
        }
        Command::Get { network, field } => {
            println!("{}", lookup_field(&registry, &network, &field)?);
        }
        Command::Check => {
            let report = check_registry(&registry)?;
            info!(
                "All {} addresses across {} networks are valid",
                report.addresses, report.networks
            );
            for shared in &report.shared {
                println!("shared address: {shared}");
            }
        }
    }

    Ok(())
}
