use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::Router;

/// Binds the listening socket and accepts connections forever, spawning
/// one task per connection. A connection's failure is logged by its own
/// task and never takes down the listener or sibling connections.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", cfg.port)).await?;
    info!("Listening on 0.0.0.0:{}", cfg.port);

    let router = Arc::new(Router::with_defaults(cfg.directory.clone()));

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
