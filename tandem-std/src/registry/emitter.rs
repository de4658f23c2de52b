//! The dual-phase registry.

use super::{builder::EmitterBuilder, table::PhaseTable, view::PhaseView, wrapper::OnceWrapper};
use parking_lot::Mutex;
use std::{
    fmt,
    sync::{Arc, Weak},
};
use tandem_core::{
    EmitError, EventName, IntoListener, Listener, ListenerId, LookupError, Phase, Phases,
};

/// State shared by every handle to one registry.
pub(crate) struct Shared<A> {
    label: Arc<str>,
    tables: [Mutex<PhaseTable<A>>; 2],
}

impl<A> Shared<A> {
    fn table(&self, phase: Phase) -> &Mutex<PhaseTable<A>> {
        &self.tables[phase.index()]
    }

    fn register(&self, phase: Phase, name: EventName, listener: Listener<A>) -> ListenerId {
        let id = listener.id();
        #[cfg(feature = "tracing")]
        let event = name.clone();
        let len = self.table(phase).lock().push(name, listener);

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(label = %self.label, %phase, %event, listener = %id, listeners = len, "listener registered");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = len;
        }
        id
    }

    /// Remove by identity. The removed listener is dropped after the table
    /// lock is released, so its destructor may use the registry.
    pub(crate) fn remove(&self, phase: Phase, name: &str, id: ListenerId) -> bool {
        let removed = self.table(phase).lock().remove(name, id);

        #[cfg(feature = "tracing")]
        {
            if let Some(removed) = &removed {
                tracing::trace!(label = %self.label, %phase, event = name, listener = %removed.id(), requested = %id, "listener removed");
            }
        }

        removed.is_some()
    }
}

/// A registry of named callbacks with independent "before" and "after"
/// phases.
///
/// Every operation takes the [`Phase`] it applies to. For call sites that
/// stay in one phase, [`before`](Self::before) and [`after`](Self::after)
/// return a [`PhaseView`] with the phase fixed.
///
/// Cloning an `Emitter` produces another handle to the same registry;
/// [`Emitter::new`] always produces an independent one. Listeners that call
/// back into their own registry should capture a [`WeakEmitter`] from
/// [`downgrade`](Self::downgrade): a strong clone stored in the registry
/// keeps it alive forever.
///
/// # Reentrancy
///
/// No lock is held while a callback runs, so callbacks may register,
/// remove, clear or emit on the same registry. A pass over a list behaves
/// like a forward index walk over that list as it changes:
///
/// - the number of steps is fixed when the pass starts, so listeners appended
///   during the pass wait for the next emit;
/// - a removal shifts later entries down, so the entry right after a removed
///   one can be skipped in the current pass;
/// - clearing the event detaches the list from the registry but the pass
///   keeps walking it.
///
/// # Example
///
/// ```rust,ignore
/// let ee = Emitter::<String>::new();
/// ee.after().on("saved", |path: &String| println!("saved {path}"));
/// ee.after().emit("saved", &"notes.md".to_string())?;
///
/// // Re-entering the registry from a listener.
/// let handle = ee.downgrade();
/// ee.before().on("save", move |path: &String| match handle.upgrade() {
///     Some(ee) => ee.after().emit("saved", path),
///     None => Ok(()),
/// });
/// ```
pub struct Emitter<A> {
    shared: Arc<Shared<A>>,
}

/// A handle to an [`Emitter`] that does not keep the registry alive.
pub struct WeakEmitter<A> {
    shared: Weak<Shared<A>>,
}

impl<A> WeakEmitter<A> {
    /// The registry, if any strong handle to it still exists.
    pub fn upgrade(&self) -> Option<Emitter<A>> {
        self.shared.upgrade().map(|shared| Emitter { shared })
    }
}

impl<A> Clone for WeakEmitter<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<A> fmt::Debug for WeakEmitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakEmitter")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

impl<A> Emitter<A> {
    /// A handle that does not keep the registry alive.
    pub fn downgrade(&self) -> WeakEmitter<A> {
        WeakEmitter {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl<A: 'static> Emitter<A> {
    /// Create a new, empty registry with default settings.
    pub fn new() -> Self {
        EmitterBuilder::new().build()
    }

    /// Start configuring a registry.
    pub fn builder() -> EmitterBuilder<A> {
        EmitterBuilder::new()
    }

    pub(crate) fn with_config(label: &str, capacity: usize) -> Self {
        Self {
            shared: Arc::new(Shared {
                label: Arc::from(label),
                tables: [
                    Mutex::new(PhaseTable::with_capacity(capacity)),
                    Mutex::new(PhaseTable::with_capacity(capacity)),
                ],
            }),
        }
    }

    /// The label used to identify this registry in logs.
    pub fn label(&self) -> &str {
        &self.shared.label
    }

    /// Operations on the "before" phase.
    pub fn before(&self) -> PhaseView<'_, A> {
        self.phase(Phase::Before)
    }

    /// Operations on the "after" phase.
    pub fn after(&self) -> PhaseView<'_, A> {
        self.phase(Phase::After)
    }

    /// Operations on `phase`.
    pub fn phase(&self, phase: Phase) -> PhaseView<'_, A> {
        PhaseView::new(self, phase)
    }

    /// Append a listener to `name`.
    ///
    /// Passing a [`Listener`] keeps its identity, passing a closure wraps it
    /// in a new listener. Returns the identity of the stored listener.
    pub fn on<M>(
        &self,
        phase: Phase,
        name: impl Into<EventName>,
        listener: impl IntoListener<A, M>,
    ) -> ListenerId {
        self.shared
            .register(phase, name.into(), listener.into_listener())
    }

    /// Append a listener that unregisters itself on its first call.
    ///
    /// What gets stored is a fresh wrapper, even if the same listener is
    /// registered with `once` repeatedly. Removing by the returned id (or a
    /// clone of the listener) removes the latest wrapper.
    pub fn once<M>(
        &self,
        phase: Phase,
        name: impl Into<EventName>,
        listener: impl IntoListener<A, M>,
    ) -> ListenerId {
        let name = name.into();
        let original = listener.into_listener();
        let original_id = original.id();
        let wrapper = OnceWrapper::listener(
            Arc::downgrade(&self.shared),
            phase,
            name.clone(),
            original,
        );

        self.shared
            .table(phase)
            .lock()
            .wrap(original_id, wrapper.id());
        self.shared.register(phase, name, wrapper);
        original_id
    }

    /// Call every listener of `name` in registration order.
    ///
    /// Unknown names are a no-op. The first failing listener ends the pass
    /// and its error is returned unchanged.
    pub fn emit(&self, phase: Phase, name: &str, payload: &A) -> Result<(), EmitError> {
        let Some(list) = self.shared.table(phase).lock().list(name) else {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(label = %self.shared.label, %phase, event = name, "no listeners, emit skipped");
            }
            return Ok(());
        };

        let len = list.lock().len();
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(label = %self.shared.label, %phase, event = name, listeners = len, "emitting event");
        }

        for index in 0..len {
            let Some(listener) = list.lock().get(index).cloned() else {
                break;
            };
            if let Err(err) = listener.call(payload) {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(label = %self.shared.label, %phase, event = name, listener = %listener.id(), error = %err, "listener failed, pass aborted");
                }
                return Err(EmitError::Callback(err));
            }
        }
        Ok(())
    }

    /// Remove `listener` from `name`.
    ///
    /// Matches the listener itself first, then the wrapper created for it
    /// by [`once`](Self::once). Returns whether anything was removed.
    pub fn remove(&self, phase: Phase, name: &str, listener: &Listener<A>) -> bool {
        self.remove_id(phase, name, listener.id())
    }

    /// Remove by identity; see [`remove`](Self::remove).
    pub fn remove_id(&self, phase: Phase, name: &str, id: ListenerId) -> bool {
        self.shared.remove(phase, name, id)
    }

    /// Drop the list for `name`, or every list of the phase when `name` is
    /// `None`.
    ///
    /// The detached listeners are dropped after the table lock is released.
    pub fn clear(&self, phase: Phase, name: Option<&str>) {
        match name {
            Some(name) => {
                let detached = self.shared.table(phase).lock().clear(name);
                #[cfg(feature = "tracing")]
                {
                    tracing::trace!(label = %self.shared.label, %phase, event = name, dropped = detached.is_some(), "event cleared");
                }
                drop(detached);
            }
            None => {
                let detached = self.shared.table(phase).lock().clear_all();
                #[cfg(feature = "tracing")]
                {
                    tracing::trace!(label = %self.shared.label, %phase, dropped = detached.len(), "phase cleared");
                }
                drop(detached);
            }
        }
    }

    /// Drop every list in each of `phases`.
    pub fn clear_phases(&self, phases: Phases) {
        for phase in phases.phases() {
            self.clear(phase, None);
        }
    }

    /// Number of listeners currently registered for `name`.
    pub fn count(&self, phase: Phase, name: &str) -> usize {
        self.shared.table(phase).lock().count(name)
    }

    /// An independent copy of the listeners registered for `name`.
    ///
    /// Fails with [`LookupError::NotFound`] when `name` has no listeners.
    pub fn listeners(&self, phase: Phase, name: &str) -> Result<Vec<Listener<A>>, LookupError> {
        self.shared
            .table(phase)
            .lock()
            .snapshot(name)
            .ok_or_else(|| LookupError::NotFound {
                phase,
                name: EventName::from(name),
            })
    }

    /// Event names with at least one listener, in creation order.
    pub fn names(&self, phase: Phase) -> Vec<EventName> {
        self.shared.table(phase).lock().names()
    }

    /// Whether `name` has at least one listener.
    pub fn contains(&self, phase: Phase, name: &str) -> bool {
        self.shared.table(phase).lock().contains(name)
    }

    /// Whether the phase has no listeners at all.
    pub fn is_empty(&self, phase: Phase) -> bool {
        self.shared.table(phase).lock().is_empty()
    }
}

impl<A: 'static> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Emitter<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("label", &self.shared.label)
            .field("before", &self.shared.table(Phase::Before).lock().len())
            .field("after", &self.shared.table(Phase::After).lock().len())
            .finish()
    }
}
