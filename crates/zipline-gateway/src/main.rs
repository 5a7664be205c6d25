mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use crate::app::App;
use crate::cli::{StorageBackendArg, CLI};
use crate::state::AppState;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use zipline_core::Registry;
use zipline_generator::{Base66Generator, ThreadRngSeeds};
use zipline_shortener::ShortenerService;
use zipline_storage::{InMemoryRegistry, MySqlRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(
                config.listen_addr,
                config.public_base_url,
                InMemoryRegistry::new(),
            )
            .await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            let registry = MySqlRegistry::connect(&mysql_dsn).await?;
            run_server(config.listen_addr, config.public_base_url, registry).await?;
        }
    }

    Ok(())
}

async fn run_server<R: Registry>(
    listen_addr: SocketAddr,
    public_base_url: String,
    registry: R,
) -> Result<(), std::io::Error> {
    let service = ShortenerService::new(registry, Base66Generator::new(ThreadRngSeeds));
    let state = AppState::new(Arc::new(service), public_base_url);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state)).await
}
