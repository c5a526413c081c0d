use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::RouteTable;

/// Binds the listener and runs the accept loop.
///
/// One task per accepted connection, bounded by a semaphore sized from
/// `server.max_connections`; the accept loop itself never blocks on request
/// handling. Connection errors are logged per peer and never take the
/// listener down.
pub async fn run(config: Arc<Config>, routes: Arc<RouteTable>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&config.server.listen_addr).await?;
    info!(
        addr = %config.server.listen_addr,
        max_connections = config.server.max_connections,
        "listening"
    );

    let permits = Arc::new(Semaphore::new(config.server.max_connections));

    loop {
        let permit = permits.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        tracing::debug!(peer = %peer, "accepted connection");

        let routes = Arc::clone(&routes);
        let config = Arc::clone(&config);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, routes, config);
            if let Err(e) = conn.run().await {
                tracing::error!(peer = %peer, error = %e, "connection error");
            }
            drop(permit);
        });
    }
}
