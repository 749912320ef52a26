// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use mtg_cards::config::DEFAULT_STORE_FILE;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// JSON file holding the card collection.
    pub store_path: PathBuf,
    /// Write an empty collection at start-up if `store_path` does not exist.
    pub create_if_missing: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            create_if_missing: true,
        }
    }
}

/// Command-line arguments, each with an environment fallback.
#[derive(Parser, Debug)]
#[command(name = "mtg-cards-node", version, about = "REST API over a JSON file of MTG cards")]
pub struct NodeArgs {
    /// Address to listen on
    #[arg(long, env = "MTG_CARDS_BIND_ADDR")]
    pub bind_addr: Option<SocketAddr>,

    /// Path of the card collection file
    #[arg(long, env = "MTG_CARDS_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    /// Fail requests instead of creating an empty store when the file is missing
    #[arg(long, env = "MTG_CARDS_NO_CREATE")]
    pub no_create: bool,
}

impl From<NodeArgs> for NodeConfig {
    fn from(args: NodeArgs) -> Self {
        let defaults = NodeConfig::default();
        Self {
            bind_addr: args.bind_addr.unwrap_or(defaults.bind_addr),
            store_path: args.store_path.unwrap_or(defaults.store_path),
            create_if_missing: !args.no_create,
        }
    }
}
