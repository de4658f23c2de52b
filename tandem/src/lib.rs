//! # tandem - Dual-Phase Publish/Subscribe
//!
//! `tandem` is a small in-process event registry. Every event name has two
//! independent listener lists, one for the "before" phase and one for the
//! "after" phase. Listeners can be registered permanently or for a single
//! call, removed by identity, cleared in bulk and inspected.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tandem::prelude::*;
//!
//! #[derive(Debug)]
//! struct Msg { text: &'static str }
//!
//! let ee = tandem::emitter::<Msg>();
//!
//! ee.after().on("e1", |msg: &Msg| println!("{}", msg.text));
//! ee.after().emit("e1", &Msg { text: "e1 ok" })?;
//!
//! // Single-shot listeners unregister themselves on first call.
//! ee.after().once("e2", |msg: &Msg| println!("{}", msg.text));
//! ee.after().emit("e2", &Msg { text: "e2 ok" })?;
//! ee.after().emit("e2", &Msg { text: "never printed" })?;
//! assert_eq!(ee.after().count("e2"), 0);
//! ```
//!
//! ## Dispatch Semantics
//!
//! Emitting is synchronous. Listeners run in registration order and may
//! re-enter the registry. A listener failure stops the pass and is returned
//! to the caller; see [`Emitter`] for the exact reentrancy rules.
//!
//! ## Features
//!
//! - `tracing` (default): structured logs of registrations, removals and
//!   emit passes.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use tandem_core::{
    // Error types
    BoxError,
    EmitError,
    LookupError,
    TandemError,
    // Listeners
    Callback,
    CallbackMarker,
    HandleMarker,
    IntoListener,
    Listener,
    ListenerId,
    // Names and phases
    EventName,
    Phase,
    Phases,
    // Outcomes
    IntoOutcome,
};

// Registry
pub use tandem_std::registry::{
    DEFAULT_LABEL, Emitter, EmitterBuilder, PhaseView, WeakEmitter,
};

/// Create a fresh, independent registry with default settings.
pub fn emitter<A: 'static>() -> Emitter<A> {
    Emitter::new()
}

/// Standard listener implementations.
pub mod listeners {
    #![allow(clippy::wildcard_imports)]
    pub use tandem_std::listeners::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use tandem_std::testing::*;
}

/// Prelude module - common imports for Tandem.
///
/// # Usage
///
/// ```rust,ignore
/// use tandem::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Callback, EmitError, Emitter, EventName, IntoListener, Listener, ListenerId,
        LookupError, Phase, Phases, WeakEmitter,
    };
}
