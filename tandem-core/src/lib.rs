//! # tandem-core
//!
//! Core vocabulary types for the Tandem dual-phase event registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs to name phases, events and listeners without pulling
//! in the registry implementation from `tandem-std`.
//!
//! # Building Blocks
//!
//! ## Phases ([`Phase`], [`Phases`])
//!
//! Every event name lives twice: once in the "before" phase and once in the
//! "after" phase. The two phases never share state. [`Phases`] is a bitflag
//! set used by operations that touch more than one phase at a time.
//!
//! ## Event Names ([`EventName`])
//!
//! A cheap-to-clone, caller-chosen key. Any string is a valid name.
//!
//! ## Listeners ([`Listener`], [`Callback`])
//!
//! A [`Callback`] is anything that can be invoked with a payload reference.
//! A [`Listener`] is a registered handle around a callback, carrying a
//! [`ListenerId`]. Identity, not structure, decides equality: two listeners
//! built from identical closures are different listeners, while clones of
//! one listener are the same listener.
//!
//! # Error Types
//!
//! - [`TandemError`] - Top-level error type
//! - [`EmitError`] - A callback failed during a pass
//! - [`LookupError`] - An event name is not registered

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod listener;
mod name;
mod outcome;
mod phase;

// Re-exports
pub use error::{BoxError, EmitError, LookupError, TandemError};
pub use listener::{Callback, CallbackMarker, HandleMarker, IntoListener, Listener, ListenerId};
pub use name::EventName;
pub use outcome::IntoOutcome;
pub use phase::{Phase, Phases};
