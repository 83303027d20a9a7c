use std::{future::ready, sync::Arc};

use axum::{http::Method, routing::get, Router};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    api::endpoint,
    config::Config,
    metrics::utils::{setup_metrics_recorder, track_metrics},
    occupancy::OccupancyEngine,
};

#[derive(Clone)]
pub struct State {
    pub engine: Arc<OccupancyEngine>,
    pub config: Config,
}

pub fn router(engine: Arc<OccupancyEngine>, config: Config) -> Router {
    let state = State {
        engine,
        config: config.clone(),
    };

    // Responses carry no credentials, any origin may read them.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS, Method::HEAD])
        .allow_headers(Any)
        .allow_origin(Any);

    // liveness/readiness checks
    let status_router = Router::new()
        .route("/", get(index))
        .route("/_readiness", get(|| ready("ready")))
        .route("/_liveness", get(|| ready("ok")));

    let occupancy_router = Router::new()
        .route("/occupancy", get(endpoint::occupancy))
        .route("/occupancy/", get(endpoint::occupancy))
        .route("/occupancy/seats/:index", get(endpoint::seat_status))
        .route("/seat-map", get(endpoint::seat_map))
        .route("/seat-map/", get(endpoint::seat_map))
        .layer(ConcurrencyLimitLayer::new(config.max_concurrency));

    let router = Router::new()
        .merge(status_router)
        .merge(occupancy_router)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum::middleware::from_fn(track_metrics))
        .with_state(state);

    // Don't install metrics unless asked to
    // Global metrics recorders can play poorly with e.g. tests
    if *config.enable_metrics {
        match setup_metrics_recorder() {
            Ok(recorder_handle) => {
                router.route("/metrics", get(move || ready(recorder_handle.render())))
            }
            Err(e) => {
                tracing::error!("Failed to install metrics recorder: {}", e);
                router
            }
        }
    } else {
        router
    }
}

pub async fn index() -> &'static str {
    "seat occupancy"
}
