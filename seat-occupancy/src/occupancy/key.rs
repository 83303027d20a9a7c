use chrono::NaiveDate;

use super::hashing::{hash_key, seed_from_hash};
use crate::cabin::CabinClass;
use crate::calendar::parse_flight_date;
use crate::errors::OccupancyError;

/// Everything the occupancy of a cabin is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccupancyKey {
    flight_id: String,
    flight_date: NaiveDate,
    cabin_class: CabinClass,
}

impl OccupancyKey {
    pub fn new(
        flight_id: impl Into<String>,
        flight_date: NaiveDate,
        cabin_class: CabinClass,
    ) -> Result<OccupancyKey, OccupancyError> {
        let flight_id = flight_id.into();
        if flight_id.trim().is_empty() {
            return Err(OccupancyError::EmptyFlightId);
        }

        Ok(OccupancyKey {
            flight_id,
            flight_date,
            cabin_class,
        })
    }

    /// Builds a key from the raw values returned by the booking API.
    pub fn parse(
        flight_id: &str,
        flight_date: &str,
        cabin_class: &str,
    ) -> Result<OccupancyKey, OccupancyError> {
        if flight_id.trim().is_empty() {
            return Err(OccupancyError::EmptyFlightId);
        }
        let flight_date = parse_flight_date(flight_date)?;
        let cabin_class = CabinClass::parse(cabin_class)?;

        OccupancyKey::new(flight_id, flight_date, cabin_class)
    }

    pub fn flight_id(&self) -> &str {
        &self.flight_id
    }

    pub fn flight_date(&self) -> NaiveDate {
        self.flight_date
    }

    pub fn cabin_class(&self) -> CabinClass {
        self.cabin_class
    }

    /// `flight_id|YYYY-MM-DD|CABIN_CLASS`
    pub fn seed_material(&self) -> String {
        format!(
            "{}|{}|{}",
            self.flight_id,
            self.flight_date.format("%Y-%m-%d"),
            self.cabin_class
        )
    }

    pub fn seed(&self) -> u32 {
        seed_from_hash(hash_key(&self.seed_material()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_material_layout() {
        let key =
            OccupancyKey::parse("YA101", "2025-03-01T08:00:00Z", "premium_economy").unwrap();
        assert_eq!(key.seed_material(), "YA101|2025-03-01|PREMIUM_ECONOMY");
    }

    #[test]
    fn test_parse_validates_in_order() {
        assert_eq!(
            OccupancyKey::parse("", "not a date", "NOPE"),
            Err(OccupancyError::EmptyFlightId)
        );
        assert_eq!(
            OccupancyKey::parse("   ", "2025-03-01", "ECONOMY"),
            Err(OccupancyError::EmptyFlightId)
        );
        assert_eq!(
            OccupancyKey::parse("YA101", "not a date", "NOPE"),
            Err(OccupancyError::InvalidFlightDate("not a date".to_string()))
        );
        assert_eq!(
            OccupancyKey::parse("YA101", "2025-03-01", "NOPE"),
            Err(OccupancyError::UnknownCabinClass("NOPE".to_string()))
        );
    }

    #[test]
    fn test_time_of_day_does_not_change_seed() {
        let a = OccupancyKey::parse("YA101", "2025-03-01", "ECONOMY").unwrap();
        let b = OccupancyKey::parse("YA101", "2025-03-01T23:59:59+09:00", "ECONOMY").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_each_component_changes_seed() {
        let base = OccupancyKey::parse("YA101", "2025-03-01", "ECONOMY").unwrap();
        let other_flight = OccupancyKey::parse("YA102", "2025-03-01", "ECONOMY").unwrap();
        let other_date = OccupancyKey::parse("YA101", "2025-03-02", "ECONOMY").unwrap();
        let other_cabin = OccupancyKey::parse("YA101", "2025-03-01", "BUSINESS").unwrap();

        assert_ne!(base.seed(), other_flight.seed());
        assert_ne!(base.seed(), other_date.seed());
        assert_ne!(base.seed(), other_cabin.seed());
    }
}
