// Occupancy evaluation counters
pub const OCCUPANCY_REQUESTS_COUNTER: &str = "occupancy_requests_total";
pub const OCCUPANCY_CACHE_HIT_COUNTER: &str = "occupancy_cache_hits_total";
pub const OCCUPANCY_CACHE_MISS_COUNTER: &str = "occupancy_cache_misses_total";
pub const OCCUPANCY_VALIDATION_ERRORS_COUNTER: &str = "occupancy_validation_errors_total";

// HTTP middleware
pub const HTTP_REQUESTS_COUNTER: &str = "http_requests_total";
pub const HTTP_REQUESTS_DURATION: &str = "http_requests_duration_seconds";
