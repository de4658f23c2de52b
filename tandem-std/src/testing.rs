//! Testing utilities for Tandem.
//!
//! This module provides listeners that make it easy to assert on what a
//! registry delivered, and in which order.
//!
//! # Features
//!
//! - [`RecordingListener`]: Records a clone of every payload it receives
//! - [`CountingListener`]: Counts invocations
//! - [`FailingListener`]: Always fails with a fixed message
//! - [`OrderRecorder`]: Hands out tagged listeners sharing one call log

use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tandem_core::{BoxError, Callback, Listener};

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records all payloads it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingListener::<Msg>::new();
/// ee.after().on("e1", recorder.clone());
///
/// ee.after().emit("e1", &msg)?;
/// assert_eq!(recorder.payloads(), vec![msg]);
/// ```
pub struct RecordingListener<A: Clone> {
    payloads: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone> RecordingListener<A> {
    /// Create a new recording listener.
    pub fn new() -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded payloads.
    pub fn payloads(&self) -> Vec<A> {
        self.payloads.lock().clone()
    }

    /// Get the number of recorded payloads.
    pub fn count(&self) -> usize {
        self.payloads.lock().len()
    }

    /// Clear all recorded payloads.
    pub fn clear(&self) {
        self.payloads.lock().clear();
    }
}

impl<A: Clone> Default for RecordingListener<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Clone for RecordingListener<A> {
    fn clone(&self) -> Self {
        Self {
            payloads: self.payloads.clone(),
        }
    }
}

impl<A: Clone + Send + 'static> Callback<A> for RecordingListener<A> {
    fn call(&self, payload: &A) -> Result<(), BoxError> {
        self.payloads.lock().push(payload.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
///
/// Clones share the counter.
#[derive(Clone, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<A> Callback<A> for CountingListener {
    fn call(&self, _payload: &A) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener that fails every time it is called.
#[derive(Debug, Clone)]
pub struct FailingListener {
    message: String,
}

impl FailingListener {
    /// Create a listener failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<A> Callback<A> for FailingListener {
    fn call(&self, _payload: &A) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// A shared log of listener tags, in call order.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderRecorder::new();
/// ee.before().on("e", order.listener("a"));
/// ee.before().on("e", order.listener("b"));
///
/// ee.before().emit("e", &())?;
/// assert_eq!(order.calls(), vec!["a", "b"]);
/// ```
#[derive(Clone, Default)]
pub struct OrderRecorder {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new listener that logs `tag` each time it is called.
    pub fn listener<A: 'static>(&self, tag: &'static str) -> Listener<A> {
        let calls = self.calls.clone();
        Listener::new(move |_: &A| calls.lock().push(tag))
    }

    /// Tags in the order they were logged.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    /// Forget everything logged so far.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}
