//! Pricing
//!
//! A [`PricingStrategy`] turns a car's daily rate and a [`RentalDays`] count into the total
//! charged for the rental.

use std::{fmt, num::NonZeroU32, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cars::PricedCar,
    prices::{Amount, amount_from_minor},
};

/// Errors that can occur while pricing a rental.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// An argument was outside its accepted range, e.g. a day count that is not positive.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The total could not be represented in minor units.
    #[error("rental total overflowed")]
    Overflow,
}

/// A positive number of rental days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "i64")]
pub struct RentalDays(NonZeroU32);

impl RentalDays {
    /// Creates a day count.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] if `days` is zero.
    pub fn new(days: u32) -> Result<Self, PricingError> {
        NonZeroU32::new(days).map(Self).ok_or_else(|| {
            PricingError::InvalidArgument(format!("rental days must be positive, got {days}"))
        })
    }

    /// Number of days.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i64> for RentalDays {
    type Error = PricingError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        let days = u32::try_from(days).map_err(|_err| {
            PricingError::InvalidArgument(format!("rental days must be positive, got {days}"))
        })?;

        Self::new(days)
    }
}

impl FromStr for RentalDays {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s.parse::<i64>().map_err(|_err| {
            PricingError::InvalidArgument(format!("rental days must be a whole number, got {s:?}"))
        })?;

        Self::try_from(days)
    }
}

impl fmt::Display for RentalDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule for turning a daily rate into a rental total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingStrategy {
    /// Daily rate times days.
    Basic,

    /// Basic total with a 15% surcharge.
    Premium,

    /// 10% off from five days, 20% off from ten days.
    #[serde(alias = "long_term")]
    LongTerm,
}

impl PricingStrategy {
    /// Every strategy, in menu order.
    pub const ALL: [PricingStrategy; 3] = [
        PricingStrategy::Basic,
        PricingStrategy::Premium,
        PricingStrategy::LongTerm,
    ];

    /// Selects a strategy by its 1-based menu position.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidArgument`] for anything other than 1, 2 or 3.
    pub fn from_ordinal(choice: u8) -> Result<Self, PricingError> {
        match choice {
            1 => Ok(PricingStrategy::Basic),
            2 => Ok(PricingStrategy::Premium),
            3 => Ok(PricingStrategy::LongTerm),
            other => Err(PricingError::InvalidArgument(format!(
                "pricing strategy choice must be 1, 2 or 3, got {other}"
            ))),
        }
    }

    /// Name accepted by [`PricingStrategy::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            PricingStrategy::Basic => "basic",
            PricingStrategy::Premium => "premium",
            PricingStrategy::LongTerm => "long-term",
        }
    }

    /// Factor applied to `rate × days`.
    pub fn multiplier(self, days: RentalDays) -> Decimal {
        match self {
            PricingStrategy::Basic => Decimal::ONE,
            PricingStrategy::Premium => Decimal::new(115, 2),
            PricingStrategy::LongTerm => match days.get() {
                10.. => Decimal::new(80, 2),
                5..=9 => Decimal::new(90, 2),
                _ => Decimal::ONE,
            },
        }
    }

    /// Total charge for renting `car` for `days`, rounded half away from zero to minor units.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total cannot be represented in minor units.
    pub fn total(self, car: &PricedCar, days: RentalDays) -> Result<Amount, PricingError> {
        let minor = Decimal::from(car.daily_rate_minor())
            .checked_mul(Decimal::from(days.get()))
            .and_then(|gross| gross.checked_mul(self.multiplier(days)))
            .ok_or(PricingError::Overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(PricingError::Overflow)?;

        Ok(amount_from_minor(minor))
    }
}

impl FromStr for PricingStrategy {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" | "1" => Ok(PricingStrategy::Basic),
            "premium" | "2" => Ok(PricingStrategy::Premium),
            "long-term" | "long_term" | "3" => Ok(PricingStrategy::LongTerm),
            other => Err(PricingError::InvalidArgument(format!(
                "unknown pricing strategy: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::cars::{CarClass, Extra};

    fn suv_with_gps_and_insurance() -> PricedCar {
        PricedCar::base(CarClass::Suv)
            .with_extra(Extra::Gps)
            .with_extra(Extra::ExtraInsurance)
    }

    fn days(n: u32) -> Result<RentalDays, PricingError> {
        RentalDays::new(n)
    }

    #[test]
    fn basic_is_rate_times_days() -> TestResult {
        let car = PricedCar::base(CarClass::Economy);

        let total = PricingStrategy::Basic.total(&car, days(3)?)?;

        assert_eq!(total, amount_from_minor(12_000 * 3));

        Ok(())
    }

    #[test]
    fn premium_adds_fifteen_percent() -> TestResult {
        let car = suv_with_gps_and_insurance();

        let total = PricingStrategy::Premium.total(&car, days(3)?)?;

        // 290.00 * 3 * 1.15 = 1000.50
        assert_eq!(total, amount_from_minor(100_050));

        Ok(())
    }

    #[test]
    fn long_term_boundaries() -> TestResult {
        let car = suv_with_gps_and_insurance();
        let strategy = PricingStrategy::LongTerm;

        assert_eq!(strategy.total(&car, days(4)?)?, amount_from_minor(29_000 * 4));
        assert_eq!(strategy.total(&car, days(5)?)?, amount_from_minor(29_000 * 5 * 9 / 10));
        assert_eq!(strategy.total(&car, days(9)?)?, amount_from_minor(29_000 * 9 * 9 / 10));
        assert_eq!(strategy.total(&car, days(10)?)?, amount_from_minor(29_000 * 10 * 8 / 10));
        assert_eq!(strategy.total(&car, days(12)?)?, amount_from_minor(278_400));

        Ok(())
    }

    #[test]
    fn multipliers() -> TestResult {
        assert_eq!(PricingStrategy::Basic.multiplier(days(30)?), Decimal::ONE);
        assert_eq!(PricingStrategy::Premium.multiplier(days(1)?), Decimal::new(115, 2));
        assert_eq!(PricingStrategy::LongTerm.multiplier(days(4)?), Decimal::ONE);
        assert_eq!(PricingStrategy::LongTerm.multiplier(days(5)?), Decimal::new(9, 1));
        assert_eq!(PricingStrategy::LongTerm.multiplier(days(10)?), Decimal::new(8, 1));

        Ok(())
    }

    #[test]
    fn premium_keeps_centavos_exact() -> TestResult {
        // 135.00 * 1.15 = 155.25
        let car = PricedCar::base(CarClass::Economy).with_extra(Extra::ChildSeat);

        let total = PricingStrategy::Premium.total(&car, days(1)?)?;

        assert_eq!(total, amount_from_minor(15_525));

        Ok(())
    }

    #[test]
    fn zero_days_is_invalid_argument() {
        assert!(matches!(
            RentalDays::new(0),
            Err(PricingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn negative_days_are_invalid_argument() {
        assert!(matches!(
            RentalDays::try_from(-3),
            Err(PricingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn days_parse_from_strings() -> TestResult {
        assert_eq!("12".parse::<RentalDays>()?.get(), 12);
        assert!("twelve".parse::<RentalDays>().is_err());
        assert!("0".parse::<RentalDays>().is_err());
        assert!(" 12".parse::<RentalDays>().is_err());

        Ok(())
    }

    #[test]
    fn strategy_selection_by_name_and_ordinal() -> TestResult {
        for (position, strategy) in (1u8..).zip(PricingStrategy::ALL) {
            assert_eq!(PricingStrategy::from_ordinal(position)?, strategy);
            assert_eq!(strategy.name().parse::<PricingStrategy>()?, strategy);
            assert_eq!(position.to_string().parse::<PricingStrategy>()?, strategy);
        }

        assert!(PricingStrategy::from_ordinal(4).is_err());
        assert!("cheapest".parse::<PricingStrategy>().is_err());
        assert!("premium ".parse::<PricingStrategy>().is_err());

        Ok(())
    }
}
