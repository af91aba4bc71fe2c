//! # event_mux
//!
//! A typed event multiplexer. Many producers emit on their own [`bus::Signal`]s;
//! a [`mapper::SignalMapper`] translates the identity of whichever producer
//! fired into an associated value and re-emits it, together with the forwarded
//! argument, on a single outgoing signal.
//!
//! ```rust
//! use event_mux::bus::{ProducerId, Signal};
//! use event_mux::mapper::SignalMapper;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mapper: SignalMapper<&'static str, i32> = SignalMapper::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! mapper.mapped().connect(move |emission| sink.borrow_mut().push(*emission.args()));
//!
//! let volume = Signal::owned_by(ProducerId::next());
//! mapper.map_connect1(&volume, "volume").unwrap();
//! volume.emit(11);
//!
//! assert_eq!(*seen.borrow(), vec![("volume", 11)]);
//! ```

pub mod bus;
pub mod error;
pub mod mapper;

#[cfg(test)]
pub(crate) mod testing_utils;

pub use bus::{Connection, ConnectionGuard, Emission, ProducerId, Signal};
pub use error::{ConfigError, MapperError, MapperResult};
pub use mapper::{MapperConfig, SignalMapper, WeakSignalMapper};
