//! Reservation Factories
//!
//! Each booking channel has its own desk. Desks share the creation steps through the provided
//! [`ReservationFactory::create`] method and differ only in the channel they stamp on the
//! reservation and the wording of the announcement.

use std::{fmt, sync::Arc};

use tracing::info;

use crate::{
    cars::assemble,
    notifications::NotificationHub,
    pricing::{PricingStrategy, RentalDays},
    reservations::{Channel, Reservation, ReservationError},
};

/// Builds reservations for one booking channel and announces each one.
pub trait ReservationFactory: fmt::Debug {
    /// Channel stamped on every reservation this factory creates.
    fn channel(&self) -> Channel;

    /// Hub the announcements are published on.
    fn notifier(&self) -> &Arc<NotificationHub>;

    /// Announcement published when a reservation is created.
    fn announcement(&self, summary: &str) -> String {
        format!("New {} reservation created: {summary}", self.channel())
    }

    /// Builds the car from `car_kind` and `extras` (applied in order, unknown extras skipped),
    /// creates the reservation and announces it.
    ///
    /// # Errors
    ///
    /// - [`ReservationError::Car`]: `car_kind` is not a known class. Nothing is announced.
    /// - [`ReservationError::Pricing`]: the announcement summary could not be priced.
    /// - [`ReservationError::Notification`]: a listener failed while the reservation was being
    ///   announced.
    fn create(
        &self,
        customer_name: &str,
        car_kind: &str,
        extras: &[&str],
        days: RentalDays,
        strategy: PricingStrategy,
    ) -> Result<Reservation, ReservationError> {
        let car = assemble(car_kind, extras)?;

        let reservation = Reservation::new(
            customer_name,
            car,
            days,
            strategy,
            self.channel(),
            Arc::clone(self.notifier()),
        );

        let summary = reservation.summarize()?;

        info!(
            customer = customer_name,
            channel = %self.channel(),
            car = %reservation.car().description(),
            "reservation created"
        );

        self.notifier().notify(&self.announcement(&summary))?;

        Ok(reservation)
    }
}

/// Books reservations made in person at the counter.
#[derive(Debug, Clone)]
pub struct CounterDesk {
    notifier: Arc<NotificationHub>,
}

impl CounterDesk {
    /// Creates a counter desk publishing on `notifier`.
    pub fn new(notifier: Arc<NotificationHub>) -> Self {
        Self { notifier }
    }
}

impl ReservationFactory for CounterDesk {
    fn channel(&self) -> Channel {
        Channel::Counter
    }

    fn notifier(&self) -> &Arc<NotificationHub> {
        &self.notifier
    }
}

/// Books reservations made through the website.
#[derive(Debug, Clone)]
pub struct OnlineDesk {
    notifier: Arc<NotificationHub>,
}

impl OnlineDesk {
    /// Creates an online desk publishing on `notifier`.
    pub fn new(notifier: Arc<NotificationHub>) -> Self {
        Self { notifier }
    }
}

impl ReservationFactory for OnlineDesk {
    fn channel(&self) -> Channel {
        Channel::Online
    }

    fn notifier(&self) -> &Arc<NotificationHub> {
        &self.notifier
    }
}
