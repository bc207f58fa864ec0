//! Quotes
//!
//! Side-by-side pricing of one car under every strategy, and tabular rendering of quotes and
//! booked reservations for the command line.

use std::io;

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cars::PricedCar,
    prices::{Amount, format_amount},
    pricing::{PricingError, PricingStrategy, RentalDays},
    reservations::Reservation,
};

/// Errors raised while rendering a table.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// A total could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Writing the table failed.
    #[error("failed to write table: {0}")]
    Io(#[from] io::Error),
}

/// What one strategy would charge for a rental.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Strategy the total was computed with
    pub strategy: PricingStrategy,

    /// Daily rate of the car, extras included
    pub daily_rate: Amount,

    /// Total for the whole rental
    pub total: Amount,
}

/// Prices `car` for `days` under every strategy, in menu order.
///
/// # Errors
///
/// Returns a [`PricingError`] if any total cannot be represented.
pub fn quote(car: &PricedCar, days: RentalDays) -> Result<Vec<Quote>, PricingError> {
    PricingStrategy::ALL
        .into_iter()
        .map(|strategy| {
            Ok(Quote {
                strategy,
                daily_rate: car.daily_rate(),
                total: strategy.total(car, days)?,
            })
        })
        .collect()
}

/// Writes `quotes` as a table.
///
/// # Errors
///
/// Returns [`QuoteError::Io`] if the table cannot be written.
pub fn render(quotes: &[Quote], mut out: impl io::Write) -> Result<(), QuoteError> {
    let mut builder = Builder::default();

    builder.push_record(["Strategy", "Daily Rate", "Total"]);

    for quote in quotes {
        builder.push_record([
            quote.strategy.to_string(),
            format_amount(&quote.daily_rate),
            format_amount(&quote.total),
        ]);
    }

    let mut table = builder.build();
    style(&mut table, 1..3);

    writeln!(out, "{table}")?;

    Ok(())
}

/// Writes one row per reservation: customer, channel, car, days, strategy, status and total.
///
/// # Errors
///
/// Returns [`QuoteError::Pricing`] if a total cannot be priced, or [`QuoteError::Io`] if the
/// table cannot be written.
pub fn render_reservations(
    reservations: &[Reservation],
    mut out: impl io::Write,
) -> Result<(), QuoteError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Customer", "Channel", "Car", "Days", "Strategy", "Status", "Total",
    ]);

    for reservation in reservations {
        builder.push_record([
            reservation.customer_name().to_string(),
            reservation.channel().to_string(),
            reservation.car().description(),
            reservation.days().to_string(),
            reservation.strategy().to_string(),
            reservation.status().to_string(),
            format_amount(&reservation.total()?),
        ]);
    }

    let mut table = builder.build();
    style(&mut table, 6..7);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

fn style(table: &mut Table, money_columns: std::ops::Range<usize>) {
    table.with(Style::modern_rounded());
    table.modify(Columns::new(money_columns), Alignment::right());
}
