//! Signals and the emission context handed to handlers

use super::connection::{Connection, SlotId, SlotRegistry};
use super::producer::ProducerId;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<A> = Rc<dyn Fn(&Emission<'_, A>)>;

/// Context of one dispatch: who fired, and with what.
///
/// An `Emission` borrows the emitted arguments, so the sender can only be
/// observed while the dispatch is in progress.
#[derive(Debug)]
pub struct Emission<'a, A> {
    sender: Option<ProducerId>,
    args: &'a A,
}

impl<'a, A> Emission<'a, A> {
    /// Build an emission context by hand, e.g. to drive an entry point directly
    pub fn new(sender: Option<ProducerId>, args: &'a A) -> Self {
        Self { sender, args }
    }

    /// Identity of the producer that emitted, if the signal has an owner
    pub fn sender(&self) -> Option<ProducerId> {
        self.sender
    }

    /// Arguments carried by the emission
    pub fn args(&self) -> &'a A {
        self.args
    }
}

struct Slot<A> {
    id: SlotId,
    handler: Handler<A>,
    // Cleared on disconnect so in-flight snapshots skip the handler.
    live: Rc<Cell<bool>>,
}

impl<A> Slot<A> {
    fn retire(self) {
        self.live.set(false);
    }
}

struct SignalCore<A> {
    owner: Option<ProducerId>,
    slots: RefCell<Vec<Slot<A>>>,
    next_slot: Cell<SlotId>,
}

impl<A> SlotRegistry for SignalCore<A> {
    fn remove_slot(&self, slot: SlotId) -> bool {
        // The handler is dropped only after the borrow ends.
        let removed = {
            let mut slots = self.slots.borrow_mut();
            slots
                .iter()
                .position(|candidate| candidate.id == slot)
                .map(|index| slots.remove(index))
        };
        match removed {
            Some(removed) => {
                removed.retire();
                true
            }
            None => false,
        }
    }

    fn has_slot(&self, slot: SlotId) -> bool {
        self.slots.borrow().iter().any(|candidate| candidate.id == slot)
    }
}

/// A single-threaded event channel carrying payloads of type `A`.
///
/// `Signal` is a cheap handle; clones share the same handler list and owner.
/// Zero-argument events are modelled as `Signal<()>`.
pub struct Signal<A> {
    core: Rc<SignalCore<A>>,
}

impl<A: 'static> Signal<A> {
    /// Create a signal with no owning producer.
    ///
    /// Emissions from such a signal carry no sender.
    pub fn new() -> Self {
        Self::with_owner(None)
    }

    /// Create a signal whose emissions are attributed to `owner`
    pub fn owned_by(owner: ProducerId) -> Self {
        Self::with_owner(Some(owner))
    }

    fn with_owner(owner: Option<ProducerId>) -> Self {
        Self {
            core: Rc::new(SignalCore {
                owner,
                slots: RefCell::new(Vec::new()),
                next_slot: Cell::new(1),
            }),
        }
    }

    /// The producer that emissions of this signal are attributed to
    pub fn sender(&self) -> Option<ProducerId> {
        self.core.owner
    }

    /// Connect a handler; it runs on every subsequent [`Signal::emit`] until
    /// the returned [`Connection`] is disconnected.
    pub fn connect<F>(&self, handler: F) -> Connection
    where
        F: Fn(&Emission<'_, A>) + 'static,
    {
        let slot = self.core.next_slot.get();
        self.core.next_slot.set(slot + 1);
        self.core.slots.borrow_mut().push(Slot {
            id: slot,
            handler: Rc::new(handler) as Handler<A>,
            live: Rc::new(Cell::new(true)),
        });

        let core: Weak<SignalCore<A>> = Rc::downgrade(&self.core);
        let registry: Weak<dyn SlotRegistry> = core;
        Connection::new(registry, slot)
    }

    /// Emit `args` to every connected handler, in connection order.
    ///
    /// The handler list is snapshotted first: handlers connected during this
    /// emission are not called until the next one, handlers disconnected
    /// during it are skipped if they have not run yet.
    pub fn emit(&self, args: A) {
        let snapshot: Vec<(Rc<Cell<bool>>, Handler<A>)> = self
            .core
            .slots
            .borrow()
            .iter()
            .map(|slot| (Rc::clone(&slot.live), Rc::clone(&slot.handler)))
            .collect();

        let emission = Emission::new(self.core.owner, &args);
        for (live, handler) in snapshot {
            if live.get() {
                handler(&emission);
            }
        }
    }

    /// Number of currently connected handlers
    pub fn receiver_count(&self) -> usize {
        self.core.slots.borrow().len()
    }

    /// Disconnect every handler
    pub fn disconnect_all(&self) {
        // Handlers may own signals; drop them after the borrow is released.
        let drained = std::mem::take(&mut *self.core.slots.borrow_mut());
        drained.into_iter().for_each(Slot::retire);
    }
}

impl<A> Clone for Signal<A> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<A: 'static> Default for Signal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Signal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("owner", &self.core.owner)
            .field("receivers", &self.core.slots.borrow().len())
            .finish()
    }
}
