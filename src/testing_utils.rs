//! Shared helpers for unit tests: logging setup and an emission recorder

use crate::bus::{Connection, Signal};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_test_logging() {
    INIT.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .unwrap_or(()); // Ignore if already initialized
    });
}

/// Collects every payload emitted on the signals it is attached to
pub struct Recorder<E> {
    events: Rc<RefCell<Vec<E>>>,
}

impl<E: Clone + 'static> Recorder<E> {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Attach to `signal`, recording a clone of each payload
    pub fn record(&self, signal: &Signal<E>) -> Connection {
        let events = Rc::clone(&self.events);
        signal.connect(move |emission| events.borrow_mut().push(emission.args().clone()))
    }

    pub fn events(&self) -> Vec<E> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl<E: Clone + 'static> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}
