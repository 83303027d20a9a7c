//! Deterministic seat occupancy.
//!
//! Check-in pages need a believable, stable "how full is this flight" signal
//! and a concrete occupied-seat layout without a real inventory system. Every
//! value here is a pure function of (flight id, flight date, cabin class,
//! total seats): no clock, no platform randomness, no shared state.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::cache::OccupancyCache;
use crate::errors::OccupancyError;

pub mod evaluate;
pub mod hashing;
pub mod key;
pub mod rng;

pub use evaluate::{
    evaluate, occupied_count, OccupancyResult, MAX_OCCUPANCY_PERCENTAGE, MAX_TOTAL_SEATS,
    MIN_OCCUPANCY_PERCENTAGE,
};
pub use key::OccupancyKey;

/// Converts a caller-supplied seat count, rejecting zero and negatives.
pub fn seat_count(total_seats: i64) -> Result<usize, OccupancyError> {
    if total_seats <= 0 {
        return Err(OccupancyError::NonPositiveSeatCount(total_seats));
    }
    usize::try_from(total_seats).map_err(|_| OccupancyError::NonPositiveSeatCount(total_seats))
}

fn evaluate_raw(
    flight_id: &str,
    flight_date: &str,
    cabin_class: &str,
    total_seats: i64,
) -> Result<OccupancyResult, OccupancyError> {
    let key = OccupancyKey::parse(flight_id, flight_date, cabin_class)?;
    evaluate(&key, seat_count(total_seats)?)
}

/// Percent of seats booked, in [40.0, 95.0] with one decimal place.
pub fn occupancy_percentage(
    flight_id: &str,
    flight_date: &str,
    cabin_class: &str,
    total_seats: i64,
) -> Result<f64, OccupancyError> {
    evaluate_raw(flight_id, flight_date, cabin_class, total_seats)
        .map(|result| result.occupancy_percentage)
}

/// Seat indices in `0..total_seats` treated as already taken.
///
/// The set size is `round(occupancy_percentage(..) / 100 * total_seats)` for
/// the same inputs.
pub fn generate_occupied_seats(
    flight_id: &str,
    flight_date: &str,
    cabin_class: &str,
    total_seats: i64,
) -> Result<BTreeSet<usize>, OccupancyError> {
    evaluate_raw(flight_id, flight_date, cabin_class, total_seats)
        .map(|result| result.occupied_indices)
}

pub fn is_seat_occupied(
    seat_index: usize,
    flight_id: &str,
    flight_date: &str,
    cabin_class: &str,
    total_seats: i64,
) -> Result<bool, OccupancyError> {
    let key = OccupancyKey::parse(flight_id, flight_date, cabin_class)?;
    let total_seats = seat_count(total_seats)?;
    check_index(seat_index, total_seats)?;
    Ok(evaluate(&key, total_seats)?.is_occupied(seat_index))
}

pub fn available_seats_count(
    flight_id: &str,
    flight_date: &str,
    cabin_class: &str,
    total_seats: i64,
) -> Result<usize, OccupancyError> {
    evaluate_raw(flight_id, flight_date, cabin_class, total_seats)
        .map(|result| result.available_seats)
}

fn check_index(seat_index: usize, total_seats: usize) -> Result<(), OccupancyError> {
    if seat_index >= total_seats {
        return Err(OccupancyError::SeatIndexOutOfRange {
            index: seat_index,
            total_seats,
        });
    }
    Ok(())
}

/// Entry point for long-lived callers such as the HTTP service.
///
/// Optionally owns an [`OccupancyCache`]; results are identical with or
/// without one.
#[derive(Clone, Default)]
pub struct OccupancyEngine {
    cache: Option<OccupancyCache>,
}

impl OccupancyEngine {
    pub fn new() -> Self {
        OccupancyEngine { cache: None }
    }

    pub fn with_cache(cache: OccupancyCache) -> Self {
        OccupancyEngine { cache: Some(cache) }
    }

    pub fn cache(&self) -> Option<&OccupancyCache> {
        self.cache.as_ref()
    }

    pub fn evaluate(
        &self,
        key: &OccupancyKey,
        total_seats: usize,
    ) -> Result<Arc<OccupancyResult>, OccupancyError> {
        match &self.cache {
            Some(cache) => cache.get_or_evaluate(key, total_seats),
            None => evaluate(key, total_seats).map(Arc::new),
        }
    }

    pub fn occupancy_percentage(
        &self,
        key: &OccupancyKey,
        total_seats: usize,
    ) -> Result<f64, OccupancyError> {
        Ok(self.evaluate(key, total_seats)?.occupancy_percentage)
    }

    pub fn occupied_seats(
        &self,
        key: &OccupancyKey,
        total_seats: usize,
    ) -> Result<BTreeSet<usize>, OccupancyError> {
        Ok(self.evaluate(key, total_seats)?.occupied_indices.clone())
    }

    pub fn is_seat_occupied(
        &self,
        key: &OccupancyKey,
        total_seats: usize,
        seat_index: usize,
    ) -> Result<bool, OccupancyError> {
        check_index(seat_index, total_seats)?;
        Ok(self.evaluate(key, total_seats)?.is_occupied(seat_index))
    }

    pub fn available_seats(
        &self,
        key: &OccupancyKey,
        total_seats: usize,
    ) -> Result<usize, OccupancyError> {
        Ok(self.evaluate(key, total_seats)?.available_seats)
    }
}
