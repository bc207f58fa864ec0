//! Prices

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Number of decimal places held in minor units.
const MINOR_UNIT_SCALE: u32 = 2;

/// A monetary amount in the rental currency.
pub type Amount = Money<'static, Currency>;

/// Currency every rate and total is quoted in.
pub fn rental_currency() -> &'static Currency {
    iso::BRL
}

/// Creates an amount from minor units (centavos) in the rental currency.
pub fn amount_from_minor(minor: i64) -> Amount {
    Money::from_minor(minor, rental_currency())
}

/// Renders an amount as its currency symbol followed by exactly two decimals, e.g. `R$2784.00`.
pub fn format_amount(amount: &Amount) -> String {
    let value = Decimal::new(amount.to_minor_units(), MINOR_UNIT_SCALE);

    format!("{}{value:.2}", amount.currency().symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_from_minor_uses_rental_currency() {
        let amount = amount_from_minor(12_000);

        assert_eq!(amount, Money::from_minor(12_000, iso::BRL));
        assert_eq!(amount.currency(), rental_currency());
    }

    #[test]
    fn format_amount_pads_to_two_decimals() {
        assert_eq!(format_amount(&amount_from_minor(278_400)), "R$2784.00");
        assert_eq!(format_amount(&amount_from_minor(100_050)), "R$1000.50");
        assert_eq!(format_amount(&amount_from_minor(5)), "R$0.05");
    }
}
