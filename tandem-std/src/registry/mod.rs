//! Dual-phase registry.
//!
//! [`Emitter`] owns one table per phase. Each table maps event names to the
//! ordered listeners registered for them and remembers which once-wrapper
//! stands in for which original listener.

pub mod builder;
pub mod emitter;
pub mod view;

mod table;
mod wrapper;

pub use builder::{DEFAULT_LABEL, EmitterBuilder};
pub use emitter::{Emitter, WeakEmitter};
pub use view::PhaseView;
