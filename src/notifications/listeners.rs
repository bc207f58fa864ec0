//! Listeners

use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
    sync::{Mutex, PoisonError},
};

use thiserror::Error;

use crate::notifications::Listener;

/// Errors raised by a listener while handling a notification.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Writing the rendered notification failed.
    #[error("failed to write notification: {0}")]
    Io(#[from] io::Error),

    /// The listener refused the notification.
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// A listener kind name was not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown listener kind: {0:?}")]
pub struct UnknownListenerKind(pub String);

/// The notification channels a desk can broadcast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// E-mail to the customer.
    Email,

    /// Text message to the customer.
    Sms,

    /// Internal audit trail.
    AuditLog,
}

impl ListenerKind {
    /// Every kind, in the order they are attached by default.
    pub const ALL: [ListenerKind; 3] = [
        ListenerKind::Email,
        ListenerKind::Sms,
        ListenerKind::AuditLog,
    ];

    /// Prefix rendered in front of each message.
    pub const fn prefix(self) -> &'static str {
        match self {
            ListenerKind::Email => "Email",
            ListenerKind::Sms => "SMS",
            ListenerKind::AuditLog => "Audit Log",
        }
    }

    /// Short name accepted by [`ListenerKind::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            ListenerKind::Email => "email",
            ListenerKind::Sms => "sms",
            ListenerKind::AuditLog => "audit",
        }
    }
}

impl FromStr for ListenerKind {
    type Err = UnknownListenerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(ListenerKind::Email),
            "sms" => Ok(ListenerKind::Sms),
            "audit" | "audit_log" => Ok(ListenerKind::AuditLog),
            other => Err(UnknownListenerKind(other.to_string())),
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders each notification as `[{prefix}] {message}` into a sink.
#[derive(Debug)]
pub struct ChannelListener<W> {
    kind: ListenerKind,
    sink: Mutex<W>,
}

impl<W: Write + Send> ChannelListener<W> {
    /// Creates a listener writing into `sink`.
    pub fn new(kind: ListenerKind, sink: W) -> Self {
        Self {
            kind,
            sink: Mutex::new(sink),
        }
    }

    /// The channel this listener renders for.
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl ChannelListener<io::Stdout> {
    /// Creates a listener writing to standard output.
    pub fn stdout(kind: ListenerKind) -> Self {
        Self::new(kind, io::stdout())
    }
}

impl ChannelListener<Vec<u8>> {
    /// Creates a listener that keeps rendered lines in memory.
    pub fn buffered(kind: ListenerKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Lines rendered so far.
    pub fn lines(&self) -> Vec<String> {
        let sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);

        String::from_utf8_lossy(&sink)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl<W> Listener for ChannelListener<W>
where
    W: Write + Send + fmt::Debug,
{
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn receive(&self, message: &str) -> Result<(), ListenerError> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);

        writeln!(sink, "[{}] {message}", self.kind.prefix())?;
        sink.flush()?;

        Ok(())
    }
}
