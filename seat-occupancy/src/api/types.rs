use serde::{Deserialize, Serialize};

/// Query string of `/occupancy` and `/occupancy/seats/:index`.
///
/// `total_seats` is signed so that zero and negative counts reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct OccupancyQuery {
    pub flight_id: String,
    pub flight_date: String,
    pub cabin_class: String,
    pub total_seats: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeatMapQuery {
    pub flight_id: String,
    pub flight_date: String,
    pub cabin_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatStatusResponse {
    pub seat_index: usize,
    pub occupied: bool,
}
