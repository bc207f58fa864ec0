//! Command Line Configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    notifications::ListenerKind,
    pricing::{PricingStrategy, RentalDays},
    reservations::Channel,
};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Rental desk command line
#[derive(Debug, Parser)]
#[command(name = "rental-desk", about = "Car rental booking desk", long_about = None)]
pub struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Notification channels to attach, in delivery order
    #[arg(
        long,
        env = "RENTAL_LISTENERS",
        value_delimiter = ',',
        default_value = "email,sms,audit",
        global = true
    )]
    pub listeners: Vec<ListenerKind>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Book, confirm and update a single reservation
    Book(BookArgs),

    /// Compare every pricing strategy for one car
    Quote(QuoteArgs),

    /// Process a YAML booking sheet
    Batch(BatchArgs),
}

/// The car being booked or quoted.
#[derive(Debug, Args)]
pub struct CarArgs {
    /// Car class (economy, suv, luxury)
    #[arg(long)]
    pub car: String,

    /// Extra to add (gps, child_seat, insurance); repeat to stack
    #[arg(long = "extra")]
    pub extras: Vec<String>,

    /// Rental length in days
    #[arg(long)]
    pub days: RentalDays,
}

/// Arguments for `book`.
#[derive(Debug, Args)]
pub struct BookArgs {
    /// Customer name
    #[arg(long)]
    pub customer: String,

    /// Booking channel (local, online)
    #[arg(long, default_value = "local")]
    pub channel: Channel,

    /// Car, extras and days
    #[command(flatten)]
    pub car: CarArgs,

    /// Pricing strategy (basic, premium, long-term, or 1, 2, 3)
    #[arg(long, default_value = "basic")]
    pub strategy: PricingStrategy,

    /// Status to apply after confirmation; repeat for several
    #[arg(long = "status")]
    pub statuses: Vec<String>,
}

/// Arguments for `quote`.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Car, extras and days
    #[command(flatten)]
    pub car: CarArgs,
}

/// Arguments for `batch`.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Path to the booking sheet
    pub path: PathBuf,
}
