//! Car Classes

use std::{fmt, str::FromStr};

use crate::cars::CarError;

/// Base vehicle class offered at the desk, each with a fixed daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarClass {
    /// Small, cheap to run.
    Economy,

    /// Sport utility vehicle.
    Suv,

    /// Top of the range.
    Luxury,
}

impl CarClass {
    /// Every class, in menu order.
    pub const ALL: [CarClass; 3] = [CarClass::Economy, CarClass::Suv, CarClass::Luxury];

    /// Daily rate in minor units (centavos).
    pub const fn daily_rate_minor(self) -> i64 {
        match self {
            CarClass::Economy => 12_000,
            CarClass::Suv => 22_000,
            CarClass::Luxury => 40_000,
        }
    }

    /// Human-readable description used in summaries.
    pub const fn description(self) -> &'static str {
        match self {
            CarClass::Economy => "Economy Car",
            CarClass::Suv => "SUV",
            CarClass::Luxury => "Luxury Car",
        }
    }

    /// Token accepted by [`CarClass::from_str`].
    pub const fn token(self) -> &'static str {
        match self {
            CarClass::Economy => "economy",
            CarClass::Suv => "suv",
            CarClass::Luxury => "luxury",
        }
    }
}

impl FromStr for CarClass {
    type Err = CarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economy" => Ok(CarClass::Economy),
            "suv" => Ok(CarClass::Suv),
            "luxury" => Ok(CarClass::Luxury),
            other => Err(CarError::InvalidCarKind(other.to_string())),
        }
    }
}

impl fmt::Display for CarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
