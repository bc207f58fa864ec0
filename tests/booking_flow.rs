//! End-to-end booking through the desks with every notification channel attached.

use std::{sync::Arc, thread};

use rental_desk::prelude::*;
use testresult::TestResult;

type Buffered = Arc<ChannelListener<Vec<u8>>>;

fn hub_with_all_channels() -> (Arc<NotificationHub>, [(Buffered, ListenerKey); 3]) {
    let hub = Arc::new(NotificationHub::new());

    let listeners = ListenerKind::ALL.map(|kind| {
        let listener = Arc::new(ChannelListener::buffered(kind));
        let key = hub.attach(Arc::clone(&listener) as Arc<dyn Listener>);

        (listener, key)
    });

    (hub, listeners)
}

#[test]
fn counter_booking_is_announced_on_every_channel() -> TestResult {
    let (hub, [(email, _), (sms, _), (audit, _)]) = hub_with_all_channels();
    let desk = CounterDesk::new(Arc::clone(&hub));

    let mut reservation = desk.create(
        "Alice",
        "suv",
        &["gps", "insurance"],
        RentalDays::new(12)?,
        PricingStrategy::LongTerm,
    )?;

    assert_eq!(reservation.total()?, amount_from_minor(278_400));

    reservation.confirm()?;
    reservation.set_status("picked up")?;

    let summary = "Reservation for Alice: SUV + GPS + Extra Insurance for 12 day(s) (counter) - Total: R$2784.00";

    for (listener, prefix) in [(&email, "Email"), (&sms, "SMS"), (&audit, "Audit Log")] {
        assert_eq!(
            listener.lines(),
            [
                format!("[{prefix}] New counter reservation created: {summary}"),
                format!("[{prefix}] {summary} | Status: confirmed"),
                format!("[{prefix}] Status changed: Alice → picked up"),
            ]
        );
    }

    Ok(())
}

#[test]
fn detached_channel_misses_later_updates() -> TestResult {
    let (hub, [(email, _), (sms, sms_key), _]) = hub_with_all_channels();
    let desk = OnlineDesk::new(Arc::clone(&hub));

    let mut reservation = desk.create(
        "Bruno",
        "economy",
        &["child_seat"],
        RentalDays::new(3)?,
        PricingStrategy::Basic,
    )?;

    hub.detach(sms_key)?;
    reservation.confirm()?;

    assert_eq!(email.lines().len(), 2);
    assert_eq!(
        sms.lines(),
        ["[SMS] New online reservation created: Reservation for Bruno: Economy Car + Child Seat for 3 day(s) (online) - Total: R$405.00"]
    );
    assert!(matches!(
        hub.detach(sms_key),
        Err(NotificationError::ListenerNotFound(_))
    ));

    Ok(())
}

#[test]
fn invalid_car_kind_announces_nothing() -> TestResult {
    let (hub, [(email, _), (sms, _), (audit, _)]) = hub_with_all_channels();

    let result = Channel::Online.desk(hub).create(
        "Eva",
        "sedan",
        &[],
        RentalDays::new(2)?,
        PricingStrategy::Premium,
    );

    assert!(matches!(
        result,
        Err(ReservationError::Car(CarError::InvalidCarKind(_)))
    ));
    assert!(email.lines().is_empty());
    assert!(sms.lines().is_empty());
    assert!(audit.lines().is_empty());

    Ok(())
}

#[test]
fn hub_is_shared_between_threads() -> TestResult {
    let hub = Arc::new(NotificationHub::new());
    let audit = Arc::new(ChannelListener::buffered(ListenerKind::AuditLog));
    hub.attach(Arc::clone(&audit) as Arc<dyn Listener>);

    let customers = ["Ana", "Beto", "Cris", "Duda"];

    thread::scope(|scope| {
        let handles: Vec<_> = customers
            .iter()
            .map(|&customer| {
                let desk = OnlineDesk::new(Arc::clone(&hub));

                scope.spawn(move || -> Result<(), ReservationError> {
                    let mut reservation = desk.create(
                        customer,
                        "luxury",
                        &["gps"],
                        RentalDays::new(1)?,
                        PricingStrategy::Basic,
                    )?;

                    reservation.confirm()
                })
            })
            .collect();

        for handle in handles {
            assert!(matches!(handle.join(), Ok(Ok(()))));
        }
    });

    let lines = audit.lines();

    assert_eq!(lines.len(), customers.len() * 2);

    for customer in customers {
        let created = lines
            .iter()
            .position(|line| line.contains(&format!("created: Reservation for {customer}:")));
        let confirmed = lines.iter().position(|line| {
            line.contains(&format!("for {customer}:")) && line.ends_with("Status: confirmed")
        });

        assert!(matches!((created, confirmed), (Some(c), Some(f)) if c < f));
    }

    Ok(())
}
