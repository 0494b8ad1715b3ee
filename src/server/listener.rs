use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, ConnectionLimits};
use crate::routes::Router;

/// Binds `cfg.listen_addr` and serves forever.
///
/// Returns only on a bind or accept failure.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    info!("Binding to {}", cfg.listen_addr);
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg).await
}

/// Accept loop over an already bound listener, one task per connection.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let router = Router::from_config(cfg);
    let limits = ConnectionLimits {
        read_buffer_size: cfg.read_buffer_size,
        max_request_size: cfg.max_request_size,
    };
    let mut conn_counter: u64 = 0;

    loop {
        let (socket, peer) = listener.accept().await?;
        let id = conn_counter;
        conn_counter += 1;
        info!(conn = id, %peer, "Accepted connection");

        let router = router.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(id, socket, router, limits);
            if let Err(e) = conn.run().await {
                tracing::error!(conn = id, %peer, "Connection error: {}", e);
            }
        });
    }
}
