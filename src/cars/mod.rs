//! Cars
//!
//! A [`PricedCar`] is a base [`CarClass`] with zero or more [`Extra`]s layered on top. The daily
//! rate is the base rate plus every surcharge; the description lists the extras in the order they
//! were added.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::prices::{Amount, amount_from_minor};

pub mod classes;
pub mod extras;

pub use classes::CarClass;
pub use extras::Extra;

/// Errors raised while building a car.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarError {
    /// The token does not name a known car class.
    #[error("unknown car kind: {0:?}")]
    InvalidCarKind(String),
}

/// A car with its extras, priced per day.
///
/// Values are immutable: [`PricedCar::with_extra`] returns a new car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedCar {
    class: CarClass,
    extras: SmallVec<[Extra; 4]>,
}

impl PricedCar {
    /// A car of the given class with no extras.
    pub fn base(class: CarClass) -> Self {
        Self {
            class,
            extras: SmallVec::new(),
        }
    }

    /// Adds an extra on top of the ones already applied. The same extra may be added repeatedly.
    #[must_use]
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extras.push(extra);
        self
    }

    /// Base class of the car.
    pub fn class(&self) -> CarClass {
        self.class
    }

    /// Extras in the order they were applied.
    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Daily rate in minor units.
    pub fn daily_rate_minor(&self) -> i64 {
        self.extras
            .iter()
            .fold(self.class.daily_rate_minor(), |rate, extra| {
                rate + extra.surcharge_minor()
            })
    }

    /// Daily rate including every extra.
    pub fn daily_rate(&self) -> Amount {
        amount_from_minor(self.daily_rate_minor())
    }

    /// Base description followed by `" + {label}"` for each extra, e.g. `SUV + GPS`.
    pub fn description(&self) -> String {
        self.extras.iter().fold(
            self.class.description().to_string(),
            |mut description, extra| {
                description.push_str(" + ");
                description.push_str(extra.label());
                description
            },
        )
    }
}

impl From<CarClass> for PricedCar {
    fn from(class: CarClass) -> Self {
        Self::base(class)
    }
}

/// Builds a car from a class token and extra tokens, applying extras left to right.
///
/// Unknown extra tokens are skipped.
///
/// # Errors
///
/// Returns [`CarError::InvalidCarKind`] if `car_token` is not a known class.
pub fn assemble<I, S>(car_token: &str, extra_tokens: I) -> Result<PricedCar, CarError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let class: CarClass = car_token.parse()?;

    let car = extra_tokens
        .into_iter()
        .fold(PricedCar::base(class), |car, token| {
            let token = token.as_ref();

            match Extra::from_token(token) {
                Some(extra) => car.with_extra(extra),
                None => {
                    debug!(extra = token, "ignoring unknown extra");
                    car
                }
            }
        });

    Ok(car)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn base_rates() {
        assert_eq!(PricedCar::base(CarClass::Economy).daily_rate(), amount_from_minor(12_000));
        assert_eq!(PricedCar::base(CarClass::Suv).daily_rate(), amount_from_minor(22_000));
        assert_eq!(PricedCar::base(CarClass::Luxury).daily_rate(), amount_from_minor(40_000));
    }

    #[test]
    fn base_descriptions() {
        assert_eq!(PricedCar::base(CarClass::Economy).description(), "Economy Car");
        assert_eq!(PricedCar::base(CarClass::Suv).description(), "SUV");
        assert_eq!(PricedCar::base(CarClass::Luxury).description(), "Luxury Car");
    }

    #[test]
    fn extras_add_surcharges_in_any_order() {
        let forwards = PricedCar::base(CarClass::Economy)
            .with_extra(Extra::Gps)
            .with_extra(Extra::ChildSeat)
            .with_extra(Extra::ExtraInsurance);

        let backwards = PricedCar::base(CarClass::Economy)
            .with_extra(Extra::ExtraInsurance)
            .with_extra(Extra::ChildSeat)
            .with_extra(Extra::Gps);

        assert_eq!(forwards.daily_rate(), amount_from_minor(12_000 + 2_000 + 1_500 + 5_000));
        assert_eq!(forwards.daily_rate(), backwards.daily_rate());
    }

    #[test]
    fn descriptions_follow_application_order() {
        let gps_first = PricedCar::base(CarClass::Economy)
            .with_extra(Extra::Gps)
            .with_extra(Extra::ChildSeat);

        let seat_first = PricedCar::base(CarClass::Economy)
            .with_extra(Extra::ChildSeat)
            .with_extra(Extra::Gps);

        assert_eq!(gps_first.description(), "Economy Car + GPS + Child Seat");
        assert_eq!(seat_first.description(), "Economy Car + Child Seat + GPS");
        assert_ne!(gps_first.description(), seat_first.description());
    }

    #[test]
    fn duplicate_extras_stack() {
        let car = PricedCar::base(CarClass::Suv)
            .with_extra(Extra::Gps)
            .with_extra(Extra::Gps);

        assert_eq!(car.daily_rate_minor(), 22_000 + 2 * 2_000);
        assert_eq!(car.description(), "SUV + GPS + GPS");
    }

    #[test]
    fn with_extra_leaves_the_original_untouched() {
        let base = PricedCar::base(CarClass::Luxury);
        let equipped = base.clone().with_extra(Extra::ExtraInsurance);

        assert_eq!(base.daily_rate_minor(), 40_000);
        assert_eq!(equipped.daily_rate_minor(), 45_000);
    }

    #[test]
    fn assemble_applies_tokens_left_to_right() -> TestResult {
        let car = assemble("suv", ["gps", "insurance"])?;

        assert_eq!(car.extras(), [Extra::Gps, Extra::ExtraInsurance]);
        assert_eq!(car.daily_rate(), amount_from_minor(29_000));
        assert_eq!(car.description(), "SUV + GPS + Extra Insurance");

        Ok(())
    }

    #[test]
    fn assemble_skips_unknown_extras() -> TestResult {
        let with_turbo = assemble("economy", ["gps", "turbo", "child_seat"])?;
        let without_turbo = assemble("economy", ["gps", "child_seat"])?;

        assert_eq!(with_turbo, without_turbo);

        Ok(())
    }

    #[test]
    fn assemble_rejects_unknown_car_kind() {
        let result = assemble("sedan", ["gps"]);

        assert_eq!(result, Err(CarError::InvalidCarKind("sedan".to_string())));
    }
}
