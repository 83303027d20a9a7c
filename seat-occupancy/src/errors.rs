use thiserror::Error;

/// Validation failures of the occupancy engine.
///
/// The engine performs no I/O, so these are the only errors it can produce.
/// Callers control every input and are expected to guard before calling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OccupancyError {
    #[error("flight_id must not be empty")]
    EmptyFlightId,
    #[error("invalid flight date: {0}")]
    InvalidFlightDate(String),
    #[error("unknown cabin class: {0}")]
    UnknownCabinClass(String),
    #[error("total_seats must be positive, got {0}")]
    NonPositiveSeatCount(i64),
    #[error("total_seats {total_seats} exceeds the maximum of {max}")]
    TooManySeats { total_seats: usize, max: usize },
    #[error("seat index {index} is outside 0..{total_seats}")]
    SeatIndexOutOfRange { index: usize, total_seats: usize },
}

impl OccupancyError {
    /// Returns a short, stable code for logs and error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            OccupancyError::EmptyFlightId => "empty_flight_id",
            OccupancyError::InvalidFlightDate(_) => "invalid_flight_date",
            OccupancyError::UnknownCabinClass(_) => "unknown_cabin_class",
            OccupancyError::NonPositiveSeatCount(_) => "non_positive_seat_count",
            OccupancyError::TooManySeats { .. } => "too_many_seats",
            OccupancyError::SeatIndexOutOfRange { .. } => "seat_index_out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_offending_value() {
        assert_eq!(
            OccupancyError::NonPositiveSeatCount(-3).to_string(),
            "total_seats must be positive, got -3"
        );
        assert_eq!(
            OccupancyError::SeatIndexOutOfRange {
                index: 96,
                total_seats: 96
            }
            .to_string(),
            "seat index 96 is outside 0..96"
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            OccupancyError::EmptyFlightId,
            OccupancyError::InvalidFlightDate("x".to_string()),
            OccupancyError::UnknownCabinClass("x".to_string()),
            OccupancyError::NonPositiveSeatCount(0),
            OccupancyError::TooManySeats {
                total_seats: 2,
                max: 1,
            },
            OccupancyError::SeatIndexOutOfRange {
                index: 1,
                total_seats: 1,
            },
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
