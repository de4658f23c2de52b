//! # tandem-std
//!
//! Standard implementations for the Tandem dual-phase event registry.
//!
//! This crate provides:
//! - **Registry**: [`Emitter`], [`EmitterBuilder`], [`PhaseView`]
//! - **Standard listeners**: Logging
//! - **Testing utilities**: recording, counting and failing listeners
//!
//! [`Emitter`]: registry::Emitter
//! [`EmitterBuilder`]: registry::EmitterBuilder
//! [`PhaseView`]: registry::PhaseView

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use tandem_core;

// Modules
pub mod listeners;
pub mod registry;
pub mod testing;
