//! Connection handles

use std::fmt;
use std::rc::Weak;

pub(super) type SlotId = u64;

/// Type-erased view of a signal's handler list, so a [`Connection`] does not
/// need to know the signal's payload type.
pub(super) trait SlotRegistry {
    fn remove_slot(&self, slot: SlotId) -> bool;
    fn has_slot(&self, slot: SlotId) -> bool;
}

/// Handle to one handler connected to one signal.
///
/// Only a weak reference to the signal is held: a connection may outlive its
/// signal. Dropping a `Connection` leaves the handler connected; use
/// [`Connection::guard`] for scope-bound connections.
pub struct Connection {
    registry: Weak<dyn SlotRegistry>,
    slot: SlotId,
}

impl Connection {
    pub(super) fn new(registry: Weak<dyn SlotRegistry>, slot: SlotId) -> Self {
        Self { registry, slot }
    }

    /// Disconnect the handler. Returns `false` if it was already disconnected
    /// or the signal no longer exists.
    pub fn disconnect(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.remove_slot(self.slot))
            .unwrap_or(false)
    }

    /// Whether the handler is still connected to a live signal
    pub fn is_connected(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.has_slot(self.slot))
            .unwrap_or(false)
    }

    /// Turn this connection into a guard that disconnects when dropped
    pub fn guard(self) -> ConnectionGuard {
        ConnectionGuard {
            connection: Some(self),
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("slot", &self.slot)
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Disconnects the wrapped [`Connection`] on drop
#[must_use = "dropping the guard disconnects the handler immediately"]
#[derive(Debug)]
pub struct ConnectionGuard {
    connection: Option<Connection>,
}

impl ConnectionGuard {
    /// Keep the handler connected and hand back the plain connection
    pub fn release(mut self) -> Connection {
        // Always `Some` until drop or release.
        match self.connection.take() {
            Some(connection) => connection,
            None => unreachable!("connection guard released twice"),
        }
    }

    /// Whether the guarded handler is still connected
    pub fn is_connected(&self) -> bool {
        self.connection
            .as_ref()
            .map(Connection::is_connected)
            .unwrap_or(false)
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.disconnect();
        }
    }
}
