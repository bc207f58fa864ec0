//! Rental Desk CLI

use std::{
    io::{self, Write},
    process::ExitCode,
    sync::Arc,
};

use rental_desk::{
    bookings::{BookingSheet, BookingSheetError},
    cars::{CarError, assemble},
    config::{BatchArgs, BookArgs, Cli, Command, QuoteArgs},
    notifications::{ChannelListener, NotificationHub},
    observability::init_subscriber,
    pricing::PricingError,
    quotes::{self, QuoteError},
    reservations::ReservationError,
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
enum DeskError {
    #[error(transparent)]
    Car(#[from] CarError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error(transparent)]
    BookingSheet(#[from] BookingSheetError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(error) => {
            _ = error.print();

            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(2));
        }
    };

    if let Err(error) = init_subscriber(&cli.logging) {
        _ = writeln!(io::stderr(), "{error}");

        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "rental desk failed");
            _ = writeln!(io::stderr(), "error: {err}");

            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DeskError> {
    let hub = Arc::new(NotificationHub::new());

    for kind in cli.listeners {
        hub.attach(Arc::new(ChannelListener::stdout(kind)));
    }

    match cli.command {
        Command::Book(args) => book(&hub, args),
        Command::Quote(args) => quote(&args),
        Command::Batch(args) => batch(&hub, &args),
    }
}

fn book(hub: &Arc<NotificationHub>, args: BookArgs) -> Result<(), DeskError> {
    let desk = args.channel.desk(Arc::clone(hub));
    let extras: Vec<&str> = args.car.extras.iter().map(String::as_str).collect();

    let mut reservation = desk.create(
        &args.customer,
        &args.car.car,
        &extras,
        args.car.days,
        args.strategy,
    )?;

    reservation.confirm()?;

    for status in args.statuses {
        reservation.set_status(status)?;
    }

    let mut out = io::stdout().lock();

    writeln!(out, "{}", reservation.summarize()?)?;
    writeln!(out, "Status: {}", reservation.status())?;

    Ok(())
}

fn quote(args: &QuoteArgs) -> Result<(), DeskError> {
    let car = assemble(&args.car.car, &args.car.extras)?;
    let rows = quotes::quote(&car, args.car.days)?;

    writeln!(io::stdout(), "{} for {} day(s)", car.description(), args.car.days)?;
    quotes::render(&rows, io::stdout().lock())?;

    Ok(())
}

fn batch(hub: &Arc<NotificationHub>, args: &BatchArgs) -> Result<(), DeskError> {
    let reservations = BookingSheet::from_path(&args.path)?.process(hub)?;

    quotes::render_reservations(&reservations, io::stdout().lock())?;

    Ok(())
}
