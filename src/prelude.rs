//! Rental desk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    bookings::{BookingRequest, BookingSheet, BookingSheetError},
    cars::{CarClass, CarError, Extra, PricedCar, assemble},
    notifications::{
        ChannelListener, Listener, ListenerError, ListenerKey, ListenerKind, NotificationError,
        NotificationHub, UnknownListenerKind,
    },
    prices::{Amount, amount_from_minor, format_amount},
    pricing::{PricingError, PricingStrategy, RentalDays},
    quotes::{Quote, QuoteError},
    reservations::{
        Channel, CounterDesk, OnlineDesk, Reservation, ReservationError, ReservationFactory,
    },
};
