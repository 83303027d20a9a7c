use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::cache::OccupancyCache;
use crate::config::Config;
use crate::occupancy::OccupancyEngine;
use crate::router;

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let engine = if config.cache_enabled() {
        OccupancyEngine::with_cache(OccupancyCache::new(config.cache_max_entries))
    } else {
        tracing::info!("occupancy cache disabled");
        OccupancyEngine::new()
    };

    let app = router::router(Arc::new(engine), config);

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on {:?}", addr),
        Err(e) => tracing::warn!("could not read listener address: {}", e),
    }

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    {
        tracing::error!("server exited with error: {}", e);
    }
}
