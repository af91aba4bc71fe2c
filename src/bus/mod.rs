//! # In-process signal bus
//!
//! The minimal publish/subscribe capability the mapper is built on: producers
//! own [`Signal`]s, handlers are connected with [`Signal::connect`] and receive
//! an [`Emission`] that names the producer which fired.
//!
//! Dispatch is synchronous and single-threaded. Handlers run on the emitting
//! call stack, in connection order, and may connect, disconnect or emit from
//! inside a callback.
//!
//! ```rust
//! use event_mux::bus::{ProducerId, Signal};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let slider = ProducerId::next();
//! let moved: Signal<u8> = Signal::owned_by(slider);
//!
//! let last = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&last);
//! let connection = moved.connect(move |emission| {
//!     sink.set(Some((emission.sender(), *emission.args())));
//! });
//!
//! moved.emit(40);
//! assert_eq!(last.get(), Some((Some(slider), 40)));
//!
//! assert!(connection.disconnect());
//! moved.emit(41);
//! assert_eq!(last.get(), Some((Some(slider), 40)));
//! ```
//!
//! ## Module Structure
//!
//! - [`producer`] - Opaque producer identities
//! - [`signal`] - Signals and the per-dispatch [`Emission`] context
//! - [`connection`] - Connection handles and RAII guards

pub use connection::{Connection, ConnectionGuard};
pub use producer::ProducerId;
pub use signal::{Emission, Signal};

mod connection;
mod producer;
mod signal;
