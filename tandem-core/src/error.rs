//! Error types for Tandem.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`TandemError`] - Top-level error type for all Tandem operations
//! - [`EmitError`] - Errors raised by callbacks during a pass
//! - [`LookupError`] - Errors from reading an unknown event name

use crate::{name::EventName, phase::Phase};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Tandem operations.
///
/// Registry operations return the narrower [`EmitError`] or
/// [`LookupError`]. Both convert into this type, so code that mixes them can
/// return `Result<_, TandemError>` and use `?` throughout.
///
/// ```rust,ignore
/// fn flush(ee: &Emitter<Batch>, batch: &Batch) -> Result<usize, TandemError> {
///     let pending = ee.before().listeners("flush")?;
///     ee.before().emit("flush", batch)?;
///     Ok(pending.len())
/// }
/// ```
#[derive(Error, Debug)]
pub enum TandemError {
    /// A callback failed while an event was being emitted.
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),

    /// An event name could not be resolved.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while emitting an event.
///
/// Callbacks are not isolated from one another: the first failure aborts the
/// remaining pass and is handed back to the caller of `emit` unchanged.
#[derive(Error, Debug)]
pub enum EmitError {
    /// A callback returned an error.
    #[error(transparent)]
    Callback(BoxError),
}

impl EmitError {
    /// Unwraps the error raised by the callback.
    pub fn into_inner(self) -> BoxError {
        match self {
            EmitError::Callback(err) => err,
        }
    }
}

/// Errors that can occur when reading registry state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No listener list exists for the event name in this phase.
    #[error("no listeners registered for event `{name}` in the {phase} phase")]
    NotFound {
        /// The phase that was searched.
        phase: Phase,
        /// The event name that was not found.
        name: EventName,
    },
}

// Convenience conversions
impl From<BoxError> for TandemError {
    fn from(err: BoxError) -> Self {
        TandemError::Custom(err)
    }
}

impl From<BoxError> for EmitError {
    fn from(err: BoxError) -> Self {
        EmitError::Callback(err)
    }
}
