//! Reservations

use std::{fmt, str::FromStr, sync::Arc};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    cars::{CarError, PricedCar},
    notifications::{NotificationError, NotificationHub},
    prices::{Amount, format_amount},
    pricing::{PricingError, PricingStrategy, RentalDays},
};

pub mod factory;

pub use factory::{CounterDesk, OnlineDesk, ReservationFactory};

/// Status of a freshly created reservation.
pub const STATUS_CREATED: &str = "created";

/// Status set by [`Reservation::confirm`].
pub const STATUS_CONFIRMED: &str = "confirmed";

/// Errors raised while creating or updating a reservation.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// The car could not be built.
    #[error(transparent)]
    Car(#[from] CarError),

    /// The rental could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A listener failed while the change was being announced.
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// The token does not name a booking channel.
    #[error("unknown booking channel: {0:?}")]
    UnknownChannel(String),
}

/// Where a reservation was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// In person, at the rental counter.
    #[serde(alias = "local")]
    Counter,

    /// Through the website.
    Online,
}

impl Channel {
    /// Label used in summaries and announcements.
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Counter => "counter",
            Channel::Online => "online",
        }
    }

    /// The factory that books reservations through this channel.
    pub fn desk(self, notifier: Arc<NotificationHub>) -> Box<dyn ReservationFactory> {
        match self {
            Channel::Counter => Box::new(CounterDesk::new(notifier)),
            Channel::Online => Box::new(OnlineDesk::new(notifier)),
        }
    }
}

impl FromStr for Channel {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" | "counter" => Ok(Channel::Counter),
            "online" => Ok(Channel::Online),
            other => Err(ReservationError::UnknownChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A booking for one customer.
///
/// The status is free text: [`Reservation::confirm`] and [`Reservation::set_status`] may be
/// called any number of times and in any order. Every change is announced on the shared
/// [`NotificationHub`].
#[derive(Debug)]
pub struct Reservation {
    customer_name: String,
    car: PricedCar,
    days: RentalDays,
    strategy: PricingStrategy,
    channel: Channel,
    status: String,
    notifier: Arc<NotificationHub>,
}

impl Reservation {
    /// Creates a reservation in the `created` status. Nothing is announced.
    pub fn new(
        customer_name: impl Into<String>,
        car: PricedCar,
        days: RentalDays,
        strategy: PricingStrategy,
        channel: Channel,
        notifier: Arc<NotificationHub>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            car,
            days,
            strategy,
            channel,
            status: STATUS_CREATED.to_string(),
            notifier,
        }
    }

    /// Customer the car is booked for.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// The booked car and its extras.
    pub fn car(&self) -> &PricedCar {
        &self.car
    }

    /// Length of the rental.
    pub fn days(&self) -> RentalDays {
        self.days
    }

    /// Pricing rule applied to the rental.
    pub fn strategy(&self) -> PricingStrategy {
        self.strategy
    }

    /// Channel the reservation was made through.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Current status.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Total for the rental, computed afresh on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total cannot be represented.
    pub fn total(&self) -> Result<Amount, PricingError> {
        self.strategy.total(&self.car, self.days)
    }

    /// One-line description of the booking and its total.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total cannot be represented.
    pub fn summarize(&self) -> Result<String, PricingError> {
        let total = self.total()?;

        Ok(format!(
            "Reservation for {}: {} for {} day(s) ({}) - Total: {}",
            self.customer_name,
            self.car.description(),
            self.days,
            self.channel,
            format_amount(&total),
        ))
    }

    /// Marks the reservation confirmed and announces it with its summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReservationError`] if the summary cannot be priced or a listener fails. The
    /// status is already `confirmed` when a listener fails.
    pub fn confirm(&mut self) -> Result<(), ReservationError> {
        STATUS_CONFIRMED.clone_into(&mut self.status);

        info!(customer = %self.customer_name, "reservation confirmed");

        let summary = self.summarize()?;
        self.notifier
            .notify(&format!("{summary} | Status: {}", self.status))?;

        Ok(())
    }

    /// Replaces the status with any text and announces the change.
    ///
    /// # Errors
    ///
    /// Returns a [`ReservationError`] if a listener fails. The status has already changed by
    /// then.
    pub fn set_status(&mut self, status: impl Into<String>) -> Result<(), ReservationError> {
        self.status = status.into();

        info!(customer = %self.customer_name, status = %self.status, "reservation status changed");

        self.notifier.notify(&format!(
            "Status changed: {} → {}",
            self.customer_name, self.status
        ))?;

        Ok(())
    }
}
