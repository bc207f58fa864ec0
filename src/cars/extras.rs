//! Extras

use std::fmt;

/// An add-on layered over a car. Each one adds a fixed daily surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extra {
    /// Satellite navigation unit.
    Gps,

    /// Child safety seat.
    ChildSeat,

    /// Insurance cover on top of the standard policy.
    ExtraInsurance,
}

impl Extra {
    /// Every extra, in menu order.
    pub const ALL: [Extra; 3] = [Extra::Gps, Extra::ChildSeat, Extra::ExtraInsurance];

    /// Daily surcharge in minor units (centavos).
    pub const fn surcharge_minor(self) -> i64 {
        match self {
            Extra::Gps => 2_000,
            Extra::ChildSeat => 1_500,
            Extra::ExtraInsurance => 5_000,
        }
    }

    /// Label appended to the car description.
    pub const fn label(self) -> &'static str {
        match self {
            Extra::Gps => "GPS",
            Extra::ChildSeat => "Child Seat",
            Extra::ExtraInsurance => "Extra Insurance",
        }
    }

    /// Token accepted by [`Extra::from_token`].
    pub const fn token(self) -> &'static str {
        match self {
            Extra::Gps => "gps",
            Extra::ChildSeat => "child_seat",
            Extra::ExtraInsurance => "insurance",
        }
    }

    /// Look up an extra by token. Unknown tokens are not an error, they simply have no extra.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gps" => Some(Extra::Gps),
            "child_seat" => Some(Extra::ChildSeat),
            "insurance" => Some(Extra::ExtraInsurance),
            _ => None,
        }
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surcharges() {
        assert_eq!(Extra::Gps.surcharge_minor(), 2_000);
        assert_eq!(Extra::ChildSeat.surcharge_minor(), 1_500);
        assert_eq!(Extra::ExtraInsurance.surcharge_minor(), 5_000);
    }

    #[test]
    fn from_token_finds_every_extra() {
        for extra in Extra::ALL {
            assert_eq!(Extra::from_token(extra.token()), Some(extra));
        }
    }

    #[test]
    fn from_token_ignores_unknown_tokens() {
        assert_eq!(Extra::from_token("turbo"), None);
        assert_eq!(Extra::from_token(""), None);
    }
}
