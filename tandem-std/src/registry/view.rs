//! Phase-bound access to a registry.

use super::emitter::Emitter;
use tandem_core::{EmitError, EventName, IntoListener, Listener, ListenerId, LookupError, Phase};

/// An [`Emitter`] with the phase fixed.
///
/// Mirrors every per-phase operation of the registry, so
/// `ee.before().on("boot", f)` is the same call as
/// `ee.on(Phase::Before, "boot", f)`.
pub struct PhaseView<'a, A> {
    emitter: &'a Emitter<A>,
    phase: Phase,
}

impl<A> Clone for PhaseView<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for PhaseView<'_, A> {}

impl<'a, A: 'static> PhaseView<'a, A> {
    pub(crate) fn new(emitter: &'a Emitter<A>, phase: Phase) -> Self {
        Self { emitter, phase }
    }

    /// The phase this view operates on.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// See [`Emitter::on`].
    pub fn on<M>(
        &self,
        name: impl Into<EventName>,
        listener: impl IntoListener<A, M>,
    ) -> ListenerId {
        self.emitter.on(self.phase, name, listener)
    }

    /// See [`Emitter::once`].
    pub fn once<M>(
        &self,
        name: impl Into<EventName>,
        listener: impl IntoListener<A, M>,
    ) -> ListenerId {
        self.emitter.once(self.phase, name, listener)
    }

    /// See [`Emitter::emit`].
    pub fn emit(&self, name: &str, payload: &A) -> Result<(), EmitError> {
        self.emitter.emit(self.phase, name, payload)
    }

    /// See [`Emitter::remove`].
    pub fn remove(&self, name: &str, listener: &Listener<A>) -> bool {
        self.emitter.remove(self.phase, name, listener)
    }

    /// See [`Emitter::remove_id`].
    pub fn remove_id(&self, name: &str, id: ListenerId) -> bool {
        self.emitter.remove_id(self.phase, name, id)
    }

    /// See [`Emitter::clear`].
    pub fn clear(&self, name: Option<&str>) {
        self.emitter.clear(self.phase, name)
    }

    /// See [`Emitter::count`].
    pub fn count(&self, name: &str) -> usize {
        self.emitter.count(self.phase, name)
    }

    /// See [`Emitter::listeners`].
    pub fn listeners(&self, name: &str) -> Result<Vec<Listener<A>>, LookupError> {
        self.emitter.listeners(self.phase, name)
    }

    /// See [`Emitter::names`].
    pub fn names(&self) -> Vec<EventName> {
        self.emitter.names(self.phase)
    }

    /// See [`Emitter::contains`].
    pub fn contains(&self, name: &str) -> bool {
        self.emitter.contains(self.phase, name)
    }

    /// See [`Emitter::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.emitter.is_empty(self.phase)
    }
}
