use std::sync::Arc;

use gatehouse::config::Config;
use gatehouse::router::RouteTable;
use gatehouse::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = Arc::new(Config::load()?);

    // Route registration belongs to the embedding application; the bare
    // binary serves content only.
    let routes = Arc::new(RouteTable::new());

    tokio::select! {
        res = server::listener::run(config, routes) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
