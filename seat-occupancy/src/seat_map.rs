use chrono::NaiveDate;
use serde::Serialize;

use crate::cabin::CabinClass;
use crate::errors::OccupancyError;
use crate::occupancy::{OccupancyEngine, OccupancyKey};

const SIX_ABREAST: &[char] = &['A', 'B', 'C', 'D', 'E', 'F'];
const FOUR_ABREAST: &[char] = &['A', 'B', 'C', 'D'];
const TWO_ABREAST: &[char] = &['A', 'B'];

/// Rows and seat letters of a cabin, enumerated row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatLayout {
    pub first_row: u16,
    pub last_row: u16,
    pub seat_letters: &'static [char],
}

impl SeatLayout {
    /// The cabin layouts offered at online check-in.
    pub fn for_cabin(cabin_class: CabinClass) -> SeatLayout {
        match cabin_class {
            CabinClass::Economy | CabinClass::PremiumEconomy => SeatLayout {
                first_row: 20,
                last_row: 35,
                seat_letters: SIX_ABREAST,
            },
            CabinClass::Business => SeatLayout {
                first_row: 10,
                last_row: 15,
                seat_letters: FOUR_ABREAST,
            },
            CabinClass::FirstClass => SeatLayout {
                first_row: 1,
                last_row: 5,
                seat_letters: TWO_ABREAST,
            },
        }
    }

    pub fn rows(&self) -> usize {
        usize::from(self.last_row.saturating_sub(self.first_row)) + 1
    }

    pub fn total_seats(&self) -> usize {
        self.rows() * self.seat_letters.len()
    }

    /// Seat labels such as `20A`; the Nth label is occupancy index N.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        (self.first_row..=self.last_row).flat_map(move |row| {
            self.seat_letters
                .iter()
                .map(move |letter| format!("{row}{letter}"))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub index: usize,
    pub label: String,
    pub occupied: bool,
}

/// A cabin's seats with the ones already taken marked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatMap {
    pub flight_id: String,
    pub flight_date: NaiveDate,
    pub cabin_class: CabinClass,
    pub layout: SeatLayout,
    pub total_seats: usize,
    pub occupancy_percentage: f64,
    pub occupied_count: usize,
    pub available_seats: usize,
    pub seats: Vec<Seat>,
}

impl SeatMap {
    pub fn build(engine: &OccupancyEngine, key: &OccupancyKey) -> Result<SeatMap, OccupancyError> {
        let layout = SeatLayout::for_cabin(key.cabin_class());
        let total_seats = layout.total_seats();
        let occupancy = engine.evaluate(key, total_seats)?;

        let seats = layout
            .labels()
            .enumerate()
            .map(|(index, label)| Seat {
                index,
                label,
                occupied: occupancy.is_occupied(index),
            })
            .collect();

        Ok(SeatMap {
            flight_id: key.flight_id().to_string(),
            flight_date: key.flight_date(),
            cabin_class: key.cabin_class(),
            layout,
            total_seats,
            occupancy_percentage: occupancy.occupancy_percentage,
            occupied_count: occupancy.occupied_count,
            available_seats: occupancy.available_seats,
            seats,
        })
    }

    pub fn seat(&self, label: &str) -> Option<&Seat> {
        self.seats
            .iter()
            .find(|seat| seat.label.eq_ignore_ascii_case(label))
    }

    pub fn available_labels(&self) -> impl Iterator<Item = &str> {
        self.seats
            .iter()
            .filter(|seat| !seat.occupied)
            .map(|seat| seat.label.as_str())
    }
}
