//! The signal mapper: association table, entry points and outgoing signal

use super::config::MapperConfig;
use crate::bus::{Connection, Emission, ProducerId, Signal};
use crate::error::{MapperError, MapperResult};
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

struct MapperCore<T, A1> {
    id: ProducerId,
    name: String,
    outgoing: Signal<(T, A1)>,
    associations: RefCell<HashMap<ProducerId, T>>,
}

impl<T: Clone + 'static, A1: 'static> MapperCore<T, A1> {
    fn lookup(&self, producer: ProducerId) -> Option<T> {
        self.associations.borrow().get(&producer).cloned()
    }

    /// Emit `(value, arg)` if `sender` is mapped. Unmapped or anonymous
    /// emissions are dropped without a trace.
    fn forward(&self, sender: Option<ProducerId>, arg: impl FnOnce() -> A1) {
        let Some(value) = sender.and_then(|producer| self.lookup(producer)) else {
            return;
        };
        // The table borrow is released here, so handlers may remap.
        self.outgoing.emit((value, arg()));
    }
}

/// Maps the identity of whichever producer fired onto a value of type `T` and
/// re-emits it, paired with the forwarded argument, on [`SignalMapper::mapped`].
///
/// `A1` is the argument forwarded from one-argument producers; zero-argument
/// producers contribute `A1::default()`. With the default `A1 = ()` the mapper
/// handles argument-less events only.
///
/// Producers are never owned. If a producer goes away, its entry stays in the
/// table until [`SignalMapper::remove_mapping`] is called or it is overwritten;
/// a stale entry is harmless because nothing emits under that identity any more.
///
/// `SignalMapper` is a handle: clones share one table and one outgoing signal.
/// Handlers installed by [`SignalMapper::map_connect`] and
/// [`SignalMapper::map_connect1`] hold only a weak reference to the mapper and
/// become no-ops once every `SignalMapper` handle is dropped.
///
/// A handler connected to [`SignalMapper::mapped`] that captures a
/// `SignalMapper` clone forms a reference cycle through the outgoing signal,
/// and the mapper is never freed. Capture [`SignalMapper::downgrade`] instead:
///
/// ```rust
/// use event_mux::bus::ProducerId;
/// use event_mux::mapper::SignalMapper;
///
/// let mapper: SignalMapper<u32> = SignalMapper::new();
/// let producer = ProducerId::next();
/// mapper.set_mapping(producer, 1);
///
/// let weak = mapper.downgrade();
/// mapper.mapped().connect(move |emission| {
///     if let Some(mapper) = weak.upgrade() {
///         mapper.set_mapping(producer, emission.args().0 + 1);
///     }
/// });
///
/// mapper.map_for(producer);
/// assert_eq!(mapper.mapping(producer), Some(2));
/// ```
pub struct SignalMapper<T, A1 = ()> {
    core: Rc<MapperCore<T, A1>>,
}

impl<T: Clone + 'static, A1: 'static> SignalMapper<T, A1> {
    /// Create a mapper with default settings
    pub fn new() -> Self {
        Self::build(MapperConfig::default())
    }

    /// Create a mapper from validated settings
    pub fn with_config(config: MapperConfig) -> MapperResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MapperConfig) -> Self {
        let id = ProducerId::next();
        Self {
            core: Rc::new(MapperCore {
                id,
                outgoing: Signal::owned_by(id),
                associations: RefCell::new(HashMap::with_capacity(config.initial_capacity)),
                name: config.name,
            }),
        }
    }

    /// Identity of the mapper itself; emissions on [`SignalMapper::mapped`]
    /// carry it as their sender, so mappers can feed other mappers.
    pub fn id(&self) -> ProducerId {
        self.core.id
    }

    pub fn name(&self) -> &str {
        &self.core.name
    }

    /// A handle that does not keep the mapper alive
    pub fn downgrade(&self) -> WeakSignalMapper<T, A1> {
        WeakSignalMapper {
            core: Rc::downgrade(&self.core),
        }
    }

    /// The outgoing channel, emitting `(value, argument)` pairs
    pub fn mapped(&self) -> &Signal<(T, A1)> {
        &self.core.outgoing
    }

    /// Associate `value` with `producer`, replacing and returning any previous value
    pub fn set_mapping(&self, producer: ProducerId, value: T) -> Option<T> {
        let previous = self.core.associations.borrow_mut().insert(producer, value);
        if previous.is_some() {
            debug!("{}: replaced mapping for {}", self.core.name, producer);
        } else {
            debug!("{}: added mapping for {}", self.core.name, producer);
        }
        previous
    }

    /// Forget the value associated with `producer`.
    ///
    /// Connections to the producer's signals are left in place; its events are
    /// simply no longer forwarded.
    pub fn remove_mapping(&self, producer: ProducerId) -> Option<T> {
        let removed = self.core.associations.borrow_mut().remove(&producer);
        if removed.is_some() {
            debug!("{}: removed mapping for {}", self.core.name, producer);
        }
        removed
    }

    /// Value currently associated with `producer`
    pub fn mapping(&self, producer: ProducerId) -> Option<T> {
        self.core.lookup(producer)
    }

    pub fn contains(&self, producer: ProducerId) -> bool {
        self.core.associations.borrow().contains_key(&producer)
    }

    pub fn len(&self) -> usize {
        self.core.associations.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.associations.borrow().is_empty()
    }

    /// Mapped producers, in ascending id order
    pub fn producers(&self) -> Vec<ProducerId> {
        let mut producers: Vec<ProducerId> =
            self.core.associations.borrow().keys().copied().collect();
        producers.sort_unstable();
        producers
    }

    /// Drop every association
    pub fn clear(&self) {
        // Values may own signals; drop them after the borrow is released.
        let cleared = std::mem::take(&mut *self.core.associations.borrow_mut());
        debug!("{}: cleared {} mappings", self.core.name, cleared.len());
    }

    fn signal_owner<A: 'static>(&self, signal: &Signal<A>) -> MapperResult<ProducerId> {
        signal.sender().ok_or_else(|| {
            warn!("{}: refusing to map a signal without an owner", self.core.name);
            MapperError::InvalidSender {
                mapper: self.core.name.clone(),
            }
        })
    }
}

impl<T: Clone + 'static, A1: Default + 'static> SignalMapper<T, A1> {
    /// Zero-argument entry point: forward `(value, A1::default())` for the
    /// emitting producer, or do nothing if it is not mapped.
    pub fn map(&self, emission: &Emission<'_, ()>) {
        self.core.forward(emission.sender(), A1::default);
    }

    /// Zero-argument dispatch on behalf of an explicit producer
    pub fn map_for(&self, producer: ProducerId) {
        self.core.forward(Some(producer), A1::default);
    }

    /// Map `signal`'s owner to `value` and connect the signal to [`SignalMapper::map`].
    ///
    /// The mapping is in place before the connection is made. Fails with
    /// [`MapperError::InvalidSender`], changing nothing, if the signal has no owner.
    pub fn map_connect(&self, signal: &Signal<()>, value: T) -> MapperResult<Connection> {
        let producer = self.signal_owner(signal)?;
        self.set_mapping(producer, value);

        let core = Rc::downgrade(&self.core);
        let connection = signal.connect(move |emission| {
            if let Some(core) = core.upgrade() {
                core.forward(emission.sender(), A1::default);
            }
        });
        debug!("{}: connected {} (no argument)", self.core.name, producer);
        Ok(connection)
    }
}

impl<T: Clone + 'static, A1: Clone + 'static> SignalMapper<T, A1> {
    /// One-argument entry point: forward `(value, argument)` for the emitting
    /// producer, or do nothing if it is not mapped.
    pub fn map1(&self, emission: &Emission<'_, A1>) {
        let arg = emission.args();
        self.core.forward(emission.sender(), || arg.clone());
    }

    /// One-argument dispatch on behalf of an explicit producer
    pub fn map1_for(&self, producer: ProducerId, arg: A1) {
        self.core.forward(Some(producer), || arg);
    }

    /// Map `signal`'s owner to `value` and connect the signal to [`SignalMapper::map1`].
    ///
    /// The mapping is in place before the connection is made. Fails with
    /// [`MapperError::InvalidSender`], changing nothing, if the signal has no owner.
    pub fn map_connect1(&self, signal: &Signal<A1>, value: T) -> MapperResult<Connection> {
        let producer = self.signal_owner(signal)?;
        self.set_mapping(producer, value);

        let core = Rc::downgrade(&self.core);
        let connection = signal.connect(move |emission| {
            if let Some(core) = core.upgrade() {
                let arg = emission.args();
                core.forward(emission.sender(), || arg.clone());
            }
        });
        debug!("{}: connected {} (one argument)", self.core.name, producer);
        Ok(connection)
    }
}

impl<T: Clone + 'static, A1: 'static> Default for SignalMapper<T, A1> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A1> Clone for SignalMapper<T, A1> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

/// Non-owning handle to a [`SignalMapper`], for use inside its own handlers
pub struct WeakSignalMapper<T, A1 = ()> {
    core: Weak<MapperCore<T, A1>>,
}

impl<T, A1> WeakSignalMapper<T, A1> {
    /// The mapper, if any strong handle is still alive
    pub fn upgrade(&self) -> Option<SignalMapper<T, A1>> {
        self.core.upgrade().map(|core| SignalMapper { core })
    }
}

impl<T, A1> Clone for WeakSignalMapper<T, A1> {
    fn clone(&self) -> Self {
        Self {
            core: Weak::clone(&self.core),
        }
    }
}

impl<T: 'static, A1: 'static> fmt::Debug for SignalMapper<T, A1> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalMapper")
            .field("name", &self.core.name)
            .field("id", &self.core.id)
            .field("mappings", &self.core.associations.borrow().len())
            .field("receivers", &self.core.outgoing.receiver_count())
            .finish()
    }
}
