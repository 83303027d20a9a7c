use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::key::OccupancyKey;
use super::rng::Xorshift32;
use crate::cabin::CabinClass;
use crate::calendar::DemandProfile;
use crate::errors::OccupancyError;

pub const MIN_OCCUPANCY_PERCENTAGE: f64 = 40.0;
pub const MAX_OCCUPANCY_PERCENTAGE: f64 = 95.0;

/// Largest cabin the engine will lay out; sampling allocates one slot per seat.
pub const MAX_TOTAL_SEATS: usize = 10_000;

// (floor, spread) in percentage points: the uplift is floor + spread * r.
const BASE_LOAD: (f64, f64) = (50.0, 20.0);
const WEEKEND_UPLIFT: (f64, f64) = (10.0, 10.0);
const HOLIDAY_UPLIFT: (f64, f64) = (15.0, 10.0);
const PEAK_SEASON_UPLIFT: (f64, f64) = (10.0, 5.0);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyResult {
    pub flight_id: String,
    pub flight_date: NaiveDate,
    pub cabin_class: CabinClass,
    pub total_seats: usize,
    /// Percent of seats booked, one decimal place, within [40.0, 95.0].
    pub occupancy_percentage: f64,
    pub occupied_count: usize,
    pub available_seats: usize,
    pub occupied_indices: BTreeSet<usize>,
    pub demand: DemandProfile,
}

impl OccupancyResult {
    pub fn is_occupied(&self, seat_index: usize) -> bool {
        self.occupied_indices.contains(&seat_index)
    }
}

/// Computes the occupancy of a cabin with `total_seats` seats.
///
/// A single xorshift32 stream seeded from the key first shapes the percentage,
/// then keeps going to pick the occupied seats. Both values therefore always
/// come from the same seed.
pub fn evaluate(
    key: &OccupancyKey,
    total_seats: usize,
) -> Result<OccupancyResult, OccupancyError> {
    if total_seats == 0 {
        return Err(OccupancyError::NonPositiveSeatCount(0));
    }
    if total_seats > MAX_TOTAL_SEATS {
        return Err(OccupancyError::TooManySeats {
            total_seats,
            max: MAX_TOTAL_SEATS,
        });
    }

    let demand = DemandProfile::for_date(key.flight_date());
    let mut rng = Xorshift32::new(key.seed());

    let occupancy_percentage = shape_percentage(&mut rng, &demand);
    let occupied_count = occupied_count(occupancy_percentage, total_seats);
    let occupied_indices = sample_indices(&mut rng, total_seats, occupied_count);

    Ok(OccupancyResult {
        flight_id: key.flight_id().to_string(),
        flight_date: key.flight_date(),
        cabin_class: key.cabin_class(),
        total_seats,
        occupancy_percentage,
        occupied_count,
        available_seats: total_seats - occupied_count,
        occupied_indices,
        demand,
    })
}

/// `round(percentage / 100 * total_seats)`, never more than `total_seats`.
pub fn occupied_count(percentage: f64, total_seats: usize) -> usize {
    let count = (percentage / 100.0 * total_seats as f64).round() as usize;
    count.min(total_seats)
}

fn uplift(rng: &mut Xorshift32, (floor, spread): (f64, f64)) -> f64 {
    floor + spread * rng.next_f64()
}

fn shape_percentage(rng: &mut Xorshift32, demand: &DemandProfile) -> f64 {
    let mut percentage = uplift(rng, BASE_LOAD);
    if demand.weekend {
        percentage += uplift(rng, WEEKEND_UPLIFT);
    }
    if demand.holiday {
        percentage += uplift(rng, HOLIDAY_UPLIFT);
    }
    if demand.peak_season {
        percentage += uplift(rng, PEAK_SEASON_UPLIFT);
    }

    let rounded = (percentage * 10.0).round() / 10.0;
    rounded.clamp(MIN_OCCUPANCY_PERCENTAGE, MAX_OCCUPANCY_PERCENTAGE)
}

/// Partial Fisher-Yates over the explicit list `0..total_seats`.
fn sample_indices(rng: &mut Xorshift32, total_seats: usize, count: usize) -> BTreeSet<usize> {
    let mut pool: Vec<usize> = (0..total_seats).collect();
    for i in 0..count {
        let j = i + rng.below(total_seats - i);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(flight_id: &str, flight_date: &str, cabin_class: &str) -> OccupancyKey {
        OccupancyKey::parse(flight_id, flight_date, cabin_class).unwrap()
    }

    #[test]
    fn test_zero_seats_is_rejected() {
        assert_eq!(
            evaluate(&key("YA101", "2025-03-01", "ECONOMY"), 0),
            Err(OccupancyError::NonPositiveSeatCount(0))
        );
    }

    #[rstest]
    #[case(MAX_TOTAL_SEATS + 1)]
    #[case(usize::MAX)]
    fn test_oversized_cabins_are_rejected(#[case] total_seats: usize) {
        assert_eq!(
            evaluate(&key("YA101", "2025-03-01", "ECONOMY"), total_seats),
            Err(OccupancyError::TooManySeats {
                total_seats,
                max: MAX_TOTAL_SEATS
            })
        );
    }

    #[test]
    fn test_largest_cabin_is_accepted() {
        let key = key("YA101", "2025-03-01", "ECONOMY");
        let result = evaluate(&key, MAX_TOTAL_SEATS).unwrap();
        assert_eq!(result.occupied_indices.len(), result.occupied_count);
    }

    #[rstest]
    #[case(72.5, 96, 70)]
    #[case(40.0, 10, 4)]
    #[case(95.0, 20, 19)]
    #[case(62.5, 24, 15)]
    #[case(95.0, 1, 1)]
    #[case(40.0, 1, 0)]
    #[case(100.0, 3, 3)]
    fn test_occupied_count_rounding(
        #[case] percentage: f64,
        #[case] total: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(occupied_count(percentage, total), expected);
    }

    #[test]
    fn test_sample_indices_are_distinct_and_bounded() {
        let mut rng = Xorshift32::new(99);
        let picked = sample_indices(&mut rng, 50, 37);
        assert_eq!(picked.len(), 37);
        assert!(picked.iter().all(|i| *i < 50));
    }

    #[test]
    fn test_sample_everything() {
        let mut rng = Xorshift32::new(5);
        let picked = sample_indices(&mut rng, 8, 8);
        assert_eq!(picked, (0..8).collect());
    }

    #[test]
    fn test_percentage_bounds_on_a_quiet_day() {
        // Tuesday in March: only the base load applies
        for n in 0..200 {
            let result = evaluate(&key(&format!("YA{n}"), "2025-03-04", "ECONOMY"), 96).unwrap();
            assert!(result.occupancy_percentage >= 50.0);
            assert!(result.occupancy_percentage <= 70.0);
        }
    }

    #[test]
    fn test_busy_days_stack_uplifts_and_clamp() {
        // Saturday, peak season and a public holiday: at least 85 points
        for n in 0..200 {
            let result = evaluate(&key(&format!("YA{n}"), "2022-01-01", "ECONOMY"), 96).unwrap();
            assert_eq!(
                result.demand,
                DemandProfile {
                    weekend: true,
                    holiday: true,
                    peak_season: true,
                }
            );
            assert!(result.occupancy_percentage >= 85.0);
            assert!(result.occupancy_percentage <= MAX_OCCUPANCY_PERCENTAGE);
        }
    }

    #[test]
    fn test_percentage_has_one_decimal_place() {
        for n in 0..100 {
            let result = evaluate(&key(&format!("ZZ{n}"), "2025-07-12", "BUSINESS"), 24).unwrap();
            let tenths = result.occupancy_percentage * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_result_is_self_consistent() {
        let result = evaluate(&key("YA101", "2025-03-01", "ECONOMY"), 96).unwrap();
        assert_eq!(result.occupied_indices.len(), result.occupied_count);
        assert_eq!(result.available_seats, 96 - result.occupied_count);
        assert_eq!(
            result.occupied_count,
            occupied_count(result.occupancy_percentage, 96)
        );
        assert!(result.occupied_indices.iter().all(|i| *i < 96));
        for index in 0..96 {
            assert_eq!(
                result.is_occupied(index),
                result.occupied_indices.contains(&index)
            );
        }
    }

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let result = evaluate(&key("YA101", "2025-03-01", "ECONOMY"), 4).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["flight_id"], "YA101");
        assert_eq!(json["flight_date"], "2025-03-01");
        assert_eq!(json["cabin_class"], "ECONOMY");
        assert_eq!(json["total_seats"], 4);
        assert_eq!(json["demand"]["weekend"], true);
        assert!(json["occupied_indices"].is_array());
    }
}
