//! # Listeners
//!
//! A [`Callback`] is the invocable part: anything that accepts a payload
//! reference and reports success or failure. A [`Listener`] is the handle
//! that actually gets registered. It pairs a shared callback with a
//! [`ListenerId`], and that id is the listener's identity.
//!
//! # Identity
//!
//! - `Listener::new` always allocates a fresh id.
//! - Cloning a listener keeps its id, so a clone can later be used to remove
//!   the registration made with the original.
//! - Equality compares ids only; the callback is never inspected.

use crate::{error::BoxError, outcome::IntoOutcome};
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a [`Listener`].
///
/// Ids are unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocate a new, never before seen id.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something that can be invoked with an emitted payload.
///
/// Implemented for every `Fn(&A) -> R` closure whose return type implements
/// [`IntoOutcome`], and for the standard listeners shipped by `tandem-std`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with payloads of type `{A}`",
    label = "missing `Callback<{A}>` implementation",
    note = "Closures must take `&{A}` and return `()`, `Result` or `Option`."
)]
pub trait Callback<A>: Send + Sync + 'static {
    /// Invoke the callback.
    fn call(&self, payload: &A) -> Result<(), BoxError>;
}

// Blanket impl for closures
impl<A, F, R> Callback<A> for F
where
    F: Fn(&A) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn call(&self, payload: &A) -> Result<(), BoxError> {
        (self)(payload).into_outcome()
    }
}

/// A registered callback handle with a stable identity.
pub struct Listener<A> {
    id: ListenerId,
    callback: Arc<dyn Callback<A>>,
}

impl<A> Listener<A> {
    /// Create a listener from a closure.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        Self::from_callback(f)
    }

    /// Create a listener from any [`Callback`] implementation.
    pub fn from_callback<C: Callback<A>>(callback: C) -> Self {
        Self::with_id(ListenerId::next(), callback)
    }

    /// Create a listener with a previously allocated id.
    ///
    /// Used by wrappers that need to know their own identity before they
    /// are registered. The resulting listener is equal to every other
    /// listener carrying `id`.
    pub fn with_id<C: Callback<A>>(id: ListenerId, callback: C) -> Self {
        Self {
            id,
            callback: Arc::new(callback),
        }
    }

    /// The identity of this listener.
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<A: 'static> Listener<A> {
    /// Invoke the wrapped callback.
    pub fn call(&self, payload: &A) -> Result<(), BoxError> {
        self.callback.call(payload)
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("id", &self.id).finish()
    }
}

/// Conversion into a registrable [`Listener`].
///
/// Passing a `Listener` keeps its identity; passing a bare callback wraps it
/// in a new listener with a fresh id. `M` only tells the two conversions
/// apart and is always inferred.
pub trait IntoListener<A, M> {
    /// Perform the conversion.
    fn into_listener(self) -> Listener<A>;
}

/// Selects the [`IntoListener`] conversion for an existing [`Listener`].
#[derive(Debug)]
pub struct HandleMarker;

/// Selects the [`IntoListener`] conversion for a bare [`Callback`].
#[derive(Debug)]
pub struct CallbackMarker;

impl<A> IntoListener<A, HandleMarker> for Listener<A> {
    fn into_listener(self) -> Listener<A> {
        self
    }
}

impl<A: 'static, C: Callback<A>> IntoListener<A, CallbackMarker> for C {
    fn into_listener(self) -> Listener<A> {
        Listener::from_callback(self)
    }
}
