use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::assets::StaticFiles;
use crate::config::Config;
use crate::http::connection::Connection;
use crate::store::RecordStore;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, cfg).await
}

/// Accept loop over an already-bound listener, split out so tests can bind
/// an ephemeral port. Every accepted connection gets its own task
/// immediately; a handler failure is logged and stays isolated to its
/// connection.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let store = Arc::new(RecordStore::new(cfg.store_path.clone()));
    let assets = Arc::new(StaticFiles::new(cfg.static_root.clone()));

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let store = Arc::clone(&store);
        let assets = Arc::clone(&assets);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, store, assets);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
