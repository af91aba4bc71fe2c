//! # Signal mapper
//!
//! Wires many producers to one consumer while keeping track of who fired.
//! Each producer identity is associated with a value of type `T`; when a
//! connected producer emits, the mapper looks up that value and emits
//! `(value, argument)` on its own outgoing signal.
//!
//! ```rust
//! use event_mux::bus::{ProducerId, Signal};
//! use event_mux::mapper::SignalMapper;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! // Three legend entries, each toggling one chart series.
//! let legend: SignalMapper<usize> = SignalMapper::new();
//! let toggled = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&toggled);
//! legend.mapped().connect(move |emission| sink.borrow_mut().push(emission.args().0));
//!
//! let clicks: Vec<Signal<()>> = (0..3).map(|_| Signal::owned_by(ProducerId::next())).collect();
//! for (series, click) in clicks.iter().enumerate() {
//!     legend.map_connect(click, series).unwrap();
//! }
//!
//! clicks[2].emit(());
//! clicks[0].emit(());
//!
//! // Muting an entry keeps its connection but stops forwarding.
//! legend.remove_mapping(clicks[2].sender().unwrap());
//! clicks[2].emit(());
//!
//! assert_eq!(*toggled.borrow(), vec![2, 0]);
//! ```
//!
//! ## Module Structure
//!
//! - [`signal_mapper`] - [`SignalMapper`] and its entry points
//! - [`config`] - [`MapperConfig`], loadable from TOML

pub use config::{MapperConfig, MAX_INITIAL_CAPACITY};
pub use signal_mapper::{SignalMapper, WeakSignalMapper};

pub mod config;
mod signal_mapper;
