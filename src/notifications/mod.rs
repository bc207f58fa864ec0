//! Notifications
//!
//! A [`NotificationHub`] keeps an ordered list of [`Listener`]s and delivers every message to
//! each of them, synchronously and in attachment order.
//!
//! The listener list sits behind a single lock, so the hub can be shared between reservations
//! (and threads) through an [`Arc`]. Delivery works on a snapshot taken under the lock: a
//! listener that attaches or detaches while a message is being delivered affects the next
//! message, not the current one.

use std::{
    fmt,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

pub mod listeners;

pub use listeners::{ChannelListener, ListenerError, ListenerKind, UnknownListenerKind};

new_key_type! {
    struct AttachmentSlot;
}

static NEXT_HUB_ID: AtomicU64 = AtomicU64::new(0);

/// Handle for one attachment of a listener to a hub.
///
/// Keys are only valid on the hub that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerKey {
    hub: u64,
    slot: AttachmentSlot,
}

/// Something that wants to hear about reservation events.
pub trait Listener: Send + Sync + fmt::Debug {
    /// Name used in logs and delivery errors.
    fn name(&self) -> &str;

    /// Handle a single notification.
    ///
    /// # Errors
    ///
    /// Returns a [`ListenerError`] if the notification could not be handled. The hub stops
    /// delivering the current message when this happens.
    fn receive(&self, message: &str) -> Result<(), ListenerError>;
}

/// Errors raised by the notification hub.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The key does not belong to an attached listener.
    #[error("listener {0:?} is not attached")]
    ListenerNotFound(ListenerKey),

    /// A listener failed; listeners after it did not receive the message.
    #[error("listener {listener} failed to receive notification: {source}")]
    Delivery {
        /// Name of the failing listener
        listener: String,

        /// The underlying listener error
        source: ListenerError,
    },
}

#[derive(Debug, Default)]
struct Registry {
    slots: SlotMap<AttachmentSlot, ()>,
    listeners: Vec<(AttachmentSlot, Arc<dyn Listener>)>,
}

/// Fans notifications out to every attached listener.
#[derive(Debug)]
pub struct NotificationHub {
    id: u64,
    registry: Mutex<Registry>,
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self {
            id: NEXT_HUB_ID.fetch_add(1, Ordering::Relaxed),
            registry: Mutex::default(),
        }
    }
}

impl NotificationHub {
    /// Creates a hub with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. Attaching the same listener twice delivers every message to it twice.
    pub fn attach(&self, listener: Arc<dyn Listener>) -> ListenerKey {
        let mut registry = self.registry();
        let slot = registry.slots.insert(());

        debug!(listener = listener.name(), "attached listener");

        registry.listeners.push((slot, listener));

        ListenerKey { hub: self.id, slot }
    }

    /// Removes the attachment identified by `key` and returns its listener.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::ListenerNotFound`] if `key` is not currently attached,
    /// including when it has already been detached or was issued by another hub.
    pub fn detach(&self, key: ListenerKey) -> Result<Arc<dyn Listener>, NotificationError> {
        if key.hub != self.id {
            return Err(NotificationError::ListenerNotFound(key));
        }

        let mut registry = self.registry();

        registry
            .slots
            .remove(key.slot)
            .ok_or(NotificationError::ListenerNotFound(key))?;

        let position = registry
            .listeners
            .iter()
            .position(|(attached, _)| *attached == key.slot)
            .ok_or(NotificationError::ListenerNotFound(key))?;

        let (_, listener) = registry.listeners.remove(position);

        debug!(listener = listener.name(), "detached listener");

        Ok(listener)
    }

    /// Delivers `message` to every attached listener in attachment order.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] for the first listener that fails. Listeners
    /// after it do not receive the message.
    pub fn notify(&self, message: &str) -> Result<(), NotificationError> {
        let listeners: SmallVec<[Arc<dyn Listener>; 4]> = self
            .registry()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener.receive(message).map_err(|source| {
                warn!(listener = listener.name(), error = %source, "notification delivery failed");

                NotificationError::Delivery {
                    listener: listener.name().to_string(),
                    source,
                }
            })?;
        }

        Ok(())
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.registry().listeners.len()
    }

    /// Whether no listener is attached.
    pub fn is_empty(&self) -> bool {
        self.registry().listeners.is_empty()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
