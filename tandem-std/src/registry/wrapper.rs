//! Single-shot wrappers.
//!
//! `once` never stores the caller's listener directly. It stores a wrapper
//! that unregisters itself and then delegates, and remembers which wrapper
//! belongs to which original so the original's handle can still remove it.

use super::emitter::Shared;
use std::{collections::HashMap, sync::Weak};
use tandem_core::{BoxError, Callback, EventName, Listener, ListenerId, Phase};

/// Original listener id to the id of its latest wrapper.
///
/// Only ids are kept, so a mapping that outlives its wrapper holds on to
/// nothing but two integers.
#[derive(Debug, Default)]
pub(crate) struct WrapperMap {
    wrappers: HashMap<ListenerId, ListenerId>,
}

impl WrapperMap {
    pub(crate) fn insert(&mut self, original: ListenerId, wrapper: ListenerId) {
        self.wrappers.insert(original, wrapper);
    }

    pub(crate) fn get(&self, original: ListenerId) -> Option<ListenerId> {
        self.wrappers.get(&original).copied()
    }
}

/// Callback stored in place of a listener registered with `once`.
pub(crate) struct OnceWrapper<A> {
    registry: Weak<Shared<A>>,
    phase: Phase,
    name: EventName,
    id: ListenerId,
    original: Listener<A>,
}

impl<A: 'static> OnceWrapper<A> {
    /// Build the wrapper listener for `original`, with a fresh identity.
    pub(crate) fn listener(
        registry: Weak<Shared<A>>,
        phase: Phase,
        name: EventName,
        original: Listener<A>,
    ) -> Listener<A> {
        let id = ListenerId::next();
        Listener::with_id(
            id,
            Self {
                registry,
                phase,
                name,
                id,
                original,
            },
        )
    }
}

impl<A: 'static> Callback<A> for OnceWrapper<A> {
    fn call(&self, payload: &A) -> Result<(), BoxError> {
        // Unregister before delegating so the original may register itself
        // again from inside its own call.
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.phase, &self.name, self.id);
        }
        self.original.call(payload)
    }
}
