//! Booking Sheets
//!
//! A booking sheet is a YAML document listing bookings to run through the desks in one go:
//!
//! ```yaml
//! bookings:
//!   - customer: Alice
//!     channel: local
//!     car: suv
//!     extras: [gps, insurance]
//!     days: 12
//!     strategy: long-term
//!     statuses: [picked up]
//! ```

use std::{fs, path::Path, sync::Arc};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    notifications::NotificationHub,
    pricing::{PricingStrategy, RentalDays},
    reservations::{Channel, Reservation, ReservationError},
};

/// Errors raised while loading or processing a booking sheet.
#[derive(Debug, Error)]
pub enum BookingSheetError {
    /// IO error reading the sheet
    #[error("Failed to read booking sheet: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error, including invalid day counts and strategy names
    #[error("Failed to parse booking sheet: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A booking could not be completed
    #[error("Booking #{index} for {customer} failed: {source}")]
    Booking {
        /// Zero-based position of the booking in the sheet
        index: usize,

        /// Customer named on the booking
        customer: String,

        /// What went wrong
        source: ReservationError,
    },
}

/// One booking in a sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    /// Customer name
    pub customer: String,

    /// Desk that takes the booking
    pub channel: Channel,

    /// Car class token
    pub car: String,

    /// Extra tokens, applied in order
    #[serde(default)]
    pub extras: Vec<String>,

    /// Rental length
    pub days: RentalDays,

    /// Pricing rule
    pub strategy: PricingStrategy,

    /// Statuses applied after confirmation, in order
    #[serde(default)]
    pub statuses: Vec<String>,
}

impl BookingRequest {
    /// Creates the reservation at the booking's desk, confirms it and applies each follow-up
    /// status.
    ///
    /// # Errors
    ///
    /// Returns a [`ReservationError`] from the first step that fails.
    pub fn book(&self, hub: &Arc<NotificationHub>) -> Result<Reservation, ReservationError> {
        let desk = self.channel.desk(Arc::clone(hub));
        let extras: Vec<&str> = self.extras.iter().map(String::as_str).collect();

        let mut reservation =
            desk.create(&self.customer, &self.car, &extras, self.days, self.strategy)?;

        reservation.confirm()?;

        for status in &self.statuses {
            reservation.set_status(status.as_str())?;
        }

        Ok(reservation)
    }
}

/// A list of bookings loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingSheet {
    /// Bookings, in processing order
    #[serde(default)]
    pub bookings: Vec<BookingRequest>,
}

impl BookingSheet {
    /// Parses a sheet from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`BookingSheetError::Yaml`] if the document is malformed or a field is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, BookingSheetError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Reads and parses a sheet from a file.
    ///
    /// # Errors
    ///
    /// Returns [`BookingSheetError::Io`] if the file cannot be read, or
    /// [`BookingSheetError::Yaml`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BookingSheetError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Books every entry in order and returns the reservations.
    ///
    /// Processing stops at the first booking that fails. Reservations booked before it have
    /// already been announced.
    ///
    /// # Errors
    ///
    /// Returns [`BookingSheetError::Booking`] for the first booking that fails.
    pub fn process(
        &self,
        hub: &Arc<NotificationHub>,
    ) -> Result<Vec<Reservation>, BookingSheetError> {
        let mut reservations = Vec::with_capacity(self.bookings.len());

        for (index, request) in self.bookings.iter().enumerate() {
            let reservation = request
                .book(hub)
                .map_err(|source| BookingSheetError::Booking {
                    index,
                    customer: request.customer.clone(),
                    source,
                })?;

            reservations.push(reservation);
        }

        info!(count = reservations.len(), "processed booking sheet");

        Ok(reservations)
    }
}
