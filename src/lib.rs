//! Rental Desk
//!
//! Books rental cars through a counter or an online desk. Cars are priced per day with optional
//! extras, totals come from an interchangeable pricing strategy, and every reservation change is
//! broadcast to the attached notification listeners.

pub mod bookings;
pub mod cars;
pub mod config;
pub mod notifications;
pub mod observability;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod quotes;
pub mod reservations;
