use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::errors::OccupancyError;

/// Fare/service tier of a booking.
///
/// Serialized as the literals used by the booking API
/// (`ECONOMY`, `PREMIUM_ECONOMY`, `BUSINESS`, `FIRST_CLASS`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    FirstClass,
}

impl CabinClass {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses a cabin literal, ignoring ASCII case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<CabinClass, OccupancyError> {
        CabinClass::from_str(raw.trim())
            .map_err(|_| OccupancyError::UnknownCabinClass(raw.to_string()))
    }
}
