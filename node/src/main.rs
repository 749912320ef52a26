// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::Parser;
use mtg_cards::CardStore;
use mtg_cards_node::config::{NodeArgs, NodeConfig};
use mtg_cards_node::server::{build_router, shared_store};
use mtg_cards_node::telemetry::init_telemetry;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    init_telemetry();

    let cfg = NodeConfig::from(NodeArgs::parse());
    tracing::info!("Initializing MTG cards node with config: {:?}", cfg);

    let store = CardStore::new(&cfg.store_path);
    if cfg.create_if_missing {
        match store.init_if_missing() {
            Ok(true) => tracing::info!("Created empty card store at {:?}", store.path()),
            Ok(false) => tracing::info!("Using card store at {:?}", store.path()),
            // Requests will report the failure; keep serving.
            Err(e) => tracing::error!("Failed to create card store: {}", e),
        }
    } else if !store.path().exists() {
        tracing::warn!("Card store {:?} does not exist; reads will fail", store.path());
    }

    let app = build_router(shared_store(store));

    let addr = cfg.bind_addr;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
