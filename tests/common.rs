//! Common test utilities for integration tests: logging setup and recorders
#![allow(dead_code)]

use event_mux::{Connection, ProducerId, Signal};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .unwrap_or(());
    });
}

/// A signal owned by a freshly allocated producer
pub fn producer<A: 'static>() -> Signal<A> {
    Signal::owned_by(ProducerId::next())
}

/// Subscribe to `signal` and collect a clone of every payload
pub fn record<E: Clone + 'static>(signal: &Signal<E>) -> (Rc<RefCell<Vec<E>>>, Connection) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let connection = signal.connect(move |emission| sink.borrow_mut().push(emission.args().clone()));
    (events, connection)
}

/// Take everything recorded so far
pub fn drain<E>(events: &Rc<RefCell<Vec<E>>>) -> Vec<E> {
    std::mem::take(&mut *events.borrow_mut())
}
