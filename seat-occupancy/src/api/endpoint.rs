use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::CACHE_CONTROL;
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics::counter;
use tracing::instrument;

use crate::api::errors::ApiError;
use crate::api::types::{OccupancyQuery, SeatMapQuery, SeatStatusResponse};
use crate::errors::OccupancyError;
use crate::metrics::consts::OCCUPANCY_REQUESTS_COUNTER;
use crate::occupancy::{seat_count, OccupancyKey};
use crate::router;
use crate::seat_map::SeatMap;

// Results for a key never change, so clients and proxies may keep them forever.
const CACHE_FOREVER: &str = "public, max-age=31536000, immutable";

fn cacheable(body: impl IntoResponse) -> Response {
    ([(CACHE_CONTROL, CACHE_FOREVER)], body).into_response()
}

fn record_key(key: &OccupancyKey) {
    let span = tracing::Span::current();
    span.record("flight_id", key.flight_id());
    span.record("cabin_class", key.cabin_class().as_str());
}

fn validated_seat_count(state: &router::State, raw: i64) -> Result<usize, ApiError> {
    let total_seats = seat_count(raw)?;
    if total_seats > state.config.max_total_seats {
        return Err(OccupancyError::TooManySeats {
            total_seats,
            max: state.config.max_total_seats,
        }
        .into());
    }
    tracing::Span::current().record("total_seats", total_seats as u64);
    Ok(total_seats)
}

/// Occupancy percentage and occupied seat indices for one cabin.
#[instrument(skip_all, fields(flight_id, cabin_class, total_seats))]
pub async fn occupancy(
    State(state): State<router::State>,
    query: Result<Query<OccupancyQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    counter!(OCCUPANCY_REQUESTS_COUNTER, "endpoint" => "occupancy").increment(1);
    let Query(query) = query.map_err(|e| ApiError::RequestParsing(e.body_text()))?;

    let key = OccupancyKey::parse(&query.flight_id, &query.flight_date, &query.cabin_class)?;
    record_key(&key);
    let total_seats = validated_seat_count(&state, query.total_seats)?;

    let result = state.engine.evaluate(&key, total_seats)?;
    tracing::debug!(
        occupancy_percentage = result.occupancy_percentage,
        occupied_count = result.occupied_count,
        "evaluated occupancy"
    );

    Ok(cacheable(Json(result.as_ref())))
}

/// Whether a single seat index is taken.
#[instrument(skip_all, fields(flight_id, cabin_class, total_seats))]
pub async fn seat_status(
    State(state): State<router::State>,
    seat_index: Result<Path<usize>, PathRejection>,
    query: Result<Query<OccupancyQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    counter!(OCCUPANCY_REQUESTS_COUNTER, "endpoint" => "seat_status").increment(1);
    let Path(seat_index) = seat_index.map_err(|e| ApiError::RequestParsing(e.body_text()))?;
    let Query(query) = query.map_err(|e| ApiError::RequestParsing(e.body_text()))?;

    let key = OccupancyKey::parse(&query.flight_id, &query.flight_date, &query.cabin_class)?;
    record_key(&key);
    let total_seats = validated_seat_count(&state, query.total_seats)?;

    let occupied = state
        .engine
        .is_seat_occupied(&key, total_seats, seat_index)?;

    Ok(cacheable(Json(SeatStatusResponse {
        seat_index,
        occupied,
    })))
}

/// Seat map of a cabin using its default layout.
#[instrument(skip_all, fields(flight_id, cabin_class))]
pub async fn seat_map(
    State(state): State<router::State>,
    query: Result<Query<SeatMapQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    counter!(OCCUPANCY_REQUESTS_COUNTER, "endpoint" => "seat_map").increment(1);
    let Query(query) = query.map_err(|e| ApiError::RequestParsing(e.body_text()))?;

    let key = OccupancyKey::parse(&query.flight_id, &query.flight_date, &query.cabin_class)?;
    record_key(&key);

    let map = SeatMap::build(&state.engine, &key)?;

    Ok(cacheable(Json(map)))
}
