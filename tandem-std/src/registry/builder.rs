//! Registry configuration.

use super::emitter::Emitter;
use std::marker::PhantomData;

/// Label given to registries that were not named explicitly.
pub const DEFAULT_LABEL: &str = "emitter";

/// Builder for constructing an [`Emitter`].
///
/// # Example
///
/// ```rust,ignore
/// let ee = Emitter::<Order>::builder()
///     .label("orders")
///     .capacity(16)
///     .build();
/// ```
pub struct EmitterBuilder<A> {
    label: String,
    capacity: usize,
    _phantom: PhantomData<fn() -> A>,
}

impl<A: 'static> Default for EmitterBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> EmitterBuilder<A> {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            capacity: 0,
            _phantom: PhantomData,
        }
    }

    /// Name the registry in log output.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Number of event names each phase table can hold before growing.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the registry.
    pub fn build(self) -> Emitter<A> {
        Emitter::with_config(&self.label, self.capacity)
    }
}
