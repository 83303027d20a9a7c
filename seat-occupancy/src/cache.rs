use std::sync::Arc;

use metrics::counter;
use moka::sync::Cache;

use crate::errors::OccupancyError;
use crate::metrics::consts::{OCCUPANCY_CACHE_HIT_COUNTER, OCCUPANCY_CACHE_MISS_COUNTER};
use crate::occupancy::{evaluate, OccupancyKey, OccupancyResult};

/// Bounded in-memory cache of occupancy results, backed by `moka`.
///
/// Results never change for a given key, so entries have no TTL and are only
/// evicted by capacity. Invalid input is never cached.
///
/// ```text
/// OccupancyCache {
///     inner: Cache<(OccupancyKey, usize), Arc<OccupancyResult>> {
///         (YA101|2025-03-01|ECONOMY, 96): OccupancyResult { occupancy_percentage: 72.4, .. },
///         (YA101|2025-03-01|BUSINESS, 24): OccupancyResult { occupancy_percentage: 61.0, .. },
///     }
/// }
/// ```
#[derive(Clone)]
pub struct OccupancyCache {
    inner: Cache<(OccupancyKey, usize), Arc<OccupancyResult>>,
}

impl OccupancyCache {
    pub fn new(max_entries: u64) -> Self {
        let inner = Cache::builder().max_capacity(max_entries).build();
        OccupancyCache { inner }
    }

    pub fn get_or_evaluate(
        &self,
        key: &OccupancyKey,
        total_seats: usize,
    ) -> Result<Arc<OccupancyResult>, OccupancyError> {
        let cache_key = (key.clone(), total_seats);

        if let Some(hit) = self.inner.get(&cache_key) {
            counter!(OCCUPANCY_CACHE_HIT_COUNTER).increment(1);
            return Ok(hit);
        }

        counter!(OCCUPANCY_CACHE_MISS_COUNTER).increment(1);
        let result = Arc::new(evaluate(key, total_seats)?);
        self.inner.insert(cache_key, result.clone());
        Ok(result)
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
